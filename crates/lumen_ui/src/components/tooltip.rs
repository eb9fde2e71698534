//! Tooltip
//!
//! Wraps a child and shows a label beside it while the pointer hovers it or
//! it holds focus. Escape dismisses the label.

use std::sync::Arc;

use lumen_core::{el, event_types, px, Element, KeyCode};
use lumen_theme::TextVariant;

use super::shared::{self, class, modifier, part};
use crate::context::{BuildContext, Child, ElementBuilder};
use crate::hooks::use_controlled;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }

    /// Position declarations for the label relative to the anchor
    fn position(self, offset: f32) -> [(&'static str, String); 3] {
        let gap = format!("calc(100% + {})", px(offset));
        match self {
            Placement::Top => [
                ("bottom", gap),
                ("left", "50%".into()),
                ("transform", "translateX(-50%)".into()),
            ],
            Placement::Bottom => [
                ("top", gap),
                ("left", "50%".into()),
                ("transform", "translateX(-50%)".into()),
            ],
            Placement::Left => [
                ("right", gap),
                ("top", "50%".into()),
                ("transform", "translateY(-50%)".into()),
            ],
            Placement::Right => [
                ("left", gap),
                ("top", "50%".into()),
                ("transform", "translateY(-50%)".into()),
            ],
        }
    }
}

type OpenHandler = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Clone)]
pub struct Tooltip {
    id: String,
    title: String,
    child: Option<Child>,
    placement: Placement,
    arrow: bool,
    open: Option<bool>,
    disable_hover: bool,
    disable_focus: bool,
    on_open_change: Option<OpenHandler>,
}

impl Tooltip {
    /// `id` names the label element and keys the open state
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            child: None,
            placement: Placement::default(),
            arrow: false,
            open: None,
            disable_hover: false,
            disable_focus: false,
            on_open_change: None,
        }
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }

    /// Controlled open state
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn disable_hover_listener(mut self, disable: bool) -> Self {
        self.disable_hover = disable;
        self
    }

    pub fn disable_focus_listener(mut self, disable: bool) -> Self {
        self.disable_focus = disable;
        self
    }

    pub fn on_open_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_open_change = Some(Arc::new(handler));
        self
    }

    fn label_id(&self) -> String {
        format!("{}-tooltip", self.id)
    }
}

impl ElementBuilder for Tooltip {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let open = use_controlled(cx, &format!("tooltip:{}", self.id), self.open, false);
        let is_open = open.get() && !self.title.is_empty();
        let background = shared::color(&theme, "grey.700").with_alpha(0.92);

        let set_open = {
            let open = open.clone();
            let on_open_change = self.on_open_change.clone();
            move |value: bool| {
                if open.get() == value {
                    return;
                }
                open.set(value);
                if let Some(on_open_change) = &on_open_change {
                    on_open_change(value);
                }
            }
        };

        let mut root = el("span")
            .class(class("tooltip"))
            .class(modifier("tooltip", self.placement.as_str()))
            .class_if(modifier("tooltip", "open"), is_open)
            .style("position", "relative")
            .style("display", "inline-flex")
            .when(is_open, |e| e.attr("aria-describedby", self.label_id()))
            .child_opt(self.child.as_ref().map(|child| child.build(cx)));

        if !self.disable_hover {
            let (enter, leave) = (set_open.clone(), set_open.clone());
            root = root
                .on(event_types::POINTER_ENTER, move |_| enter(true))
                .on(event_types::POINTER_LEAVE, move |_| leave(false));
        }
        if !self.disable_focus {
            let (focus, blur) = (set_open.clone(), set_open.clone());
            root = root
                .on(event_types::FOCUS, move |_| focus(true))
                .on(event_types::BLUR, move |_| blur(false));
        }
        root = root.on(event_types::KEY_DOWN, move |event| {
            if matches!(event.key(), Some((KeyCode::ESCAPE, _))) {
                set_open(false);
            }
        });

        if !is_open {
            return root;
        }

        let offset = if self.arrow { 14.0 } else { 8.0 };
        let mut label = el("div")
            .class(part("tooltip", "popper"))
            .attr("id", self.label_id())
            .attr("role", "tooltip")
            .styles(&shared::text_style(&theme, TextVariant::Caption))
            .style("position", "absolute")
            .style("z-index", shared::z_index(&theme, "tooltip").to_string())
            .style("max-width", "300px")
            .style("padding", "4px 8px")
            .style("border-radius", px(shared::radius(&theme, "sm")))
            .style("background-color", background.to_css())
            .style("color", "#ffffff")
            .style("font-weight", "500")
            .style("white-space", "nowrap")
            .style("pointer-events", "none");
        for (property, value) in self.placement.position(offset) {
            label = label.style(property, value);
        }
        if self.arrow {
            let edge = self.placement.as_str();
            label = label.child(
                el("span")
                    .class(part("tooltip", "arrow"))
                    .style("position", "absolute")
                    .style(edge, "100%")
                    .style("width", "0")
                    .style("height", "0")
                    .style("border", "6px solid transparent")
                    .style(format!("border-{edge}-color"), background.to_css()),
            );
        }
        root.child(label.child(self.title.as_str()))
    }
}

pub fn tooltip(id: impl Into<String>, title: impl Into<String>) -> Tooltip {
    Tooltip::new(id, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Event, Modifiers};
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_opens_on_hover_and_closes_on_leave() {
        let cx = cx();
        let tip = tooltip("save", "Save file").child("Save");
        assert!(tip.build(&cx).find_by_attr("role", "tooltip").is_none());

        tip.build(&cx).dispatch(&Event::pointer_enter());
        let el = tip.build(&cx);
        let label = el.find_by_attr("role", "tooltip").unwrap();
        assert_eq!(label.get_attr("id"), Some("save-tooltip"));
        assert_eq!(el.get_attr("aria-describedby"), Some("save-tooltip"));
        assert_eq!(label.style_value("z-index"), Some("1600"));

        el.dispatch(&Event::pointer_leave());
        assert!(tip.build(&cx).find_by_attr("role", "tooltip").is_none());
    }

    #[test]
    fn test_focus_and_escape() {
        let cx = cx();
        let tip = tooltip("help", "Help").placement(Placement::Top);
        tip.build(&cx).dispatch(&Event::focus());
        let el = tip.build(&cx);
        assert!(el.has_class("lumen-tooltip--open"));
        let label = el.find_by_attr("role", "tooltip").unwrap();
        assert_eq!(label.style_value("bottom"), Some("calc(100% + 8px)"));

        el.dispatch(&Event::key_down(KeyCode::ESCAPE, Modifiers::NONE));
        assert!(!tip.build(&cx).has_class("lumen-tooltip--open"));
    }

    #[test]
    fn test_hover_listener_disabled() {
        let el = tooltip("x", "X").disable_hover_listener(true).build(&cx());
        assert!(!el.dispatch(&Event::pointer_enter()));
    }

    #[test]
    fn test_empty_title_never_shows() {
        let el = tooltip("x", "").open(true).build(&cx());
        assert!(el.find_by_attr("role", "tooltip").is_none());
    }
}
