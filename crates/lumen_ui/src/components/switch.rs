//! Toggle switch
//!
//! A track with a sliding thumb. Controlled (`checked` plus `on_change`) or
//! uncontrolled with the state keyed by the switch id.

use std::sync::Arc;

use lumen_core::{el, event_types, px, Color, Element, KeyCode};
use lumen_theme::{Palette, TextVariant};

use super::checkbox::ToggleHandler;
use super::form_control::FieldContext;
use super::shared::{self, class, modifier, part, ComponentSize};
use crate::context::{BuildContext, ElementBuilder};
use crate::hooks::use_controlled_id;

/// Track width, track height and thumb diameter in px
fn metrics(size: ComponentSize) -> (f32, f32, f32) {
    match size {
        ComponentSize::Small => (28.0, 16.0, 12.0),
        ComponentSize::Medium => (36.0, 20.0, 16.0),
        ComponentSize::Large => (44.0, 24.0, 20.0),
    }
}

#[derive(Clone)]
pub struct Switch {
    id: Option<String>,
    checked: Option<bool>,
    default_checked: bool,
    label: Option<String>,
    disabled: bool,
    color: Palette,
    size: ComponentSize,
    on_change: Option<ToggleHandler>,
}

impl Default for Switch {
    fn default() -> Self {
        Self {
            id: None,
            checked: None,
            default_checked: false,
            label: None,
            disabled: false,
            color: Palette::Primary,
            size: ComponentSize::default(),
            on_change: None,
        }
    }
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element id; also keys the uncontrolled state
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Controlled state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Take disabled/size and id from a form control
    pub fn field(mut self, field: &FieldContext) -> Self {
        if field.id.is_some() {
            self.id = field.id.clone();
        }
        self.disabled |= field.disabled;
        self.size = field.size;
        self
    }
}

impl ElementBuilder for Switch {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let value = use_controlled_id(cx, "switch", self.id.as_deref(), self.checked, self.default_checked);
        let on = value.get();
        let (track_w, track_h, thumb) = metrics(self.size);
        let inset = (track_h - thumb) / 2.0;

        let track_color = match (on, self.disabled) {
            (true, false) => shared::palette(&theme, self.color, "main"),
            (true, true) => shared::palette(&theme, self.color, "main").with_alpha(0.38),
            (false, _) if theme.mode().is_dark() => Color::rgba(1.0, 1.0, 1.0, 0.3),
            (false, _) => Color::rgba(0.0, 0.0, 0.0, 0.38),
        };

        let thumb_el = el("span")
            .class(part("switch", "thumb"))
            .style("position", "absolute")
            .style("top", px(inset))
            .style("left", px(if on { track_w - thumb - inset } else { inset }))
            .style("width", px(thumb))
            .style("height", px(thumb))
            .style("border-radius", "50%")
            .style("background-color", "#ffffff")
            .style("box-shadow", shared::shadow(&theme, "sm"))
            .style("transition", "left 150ms cubic-bezier(0.4, 0, 0.2, 1)");

        let mut track = el("span")
            .class(part("switch", "track"))
            .attr("role", "switch")
            .attr("aria-checked", if on { "true" } else { "false" })
            .attr_opt("id", self.id.clone())
            .attr("tabindex", if self.disabled { "-1" } else { "0" })
            .when(self.disabled, |e| e.attr("aria-disabled", "true"))
            .style("position", "relative")
            .style("display", "inline-block")
            .style("flex-shrink", "0")
            .style("width", px(track_w))
            .style("height", px(track_h))
            .style("border-radius", px(track_h / 2.0))
            .style("background-color", track_color.to_css())
            .style("transition", "background-color 150ms")
            .child(thumb_el);

        let mut root = el("label")
            .class(class("switch"))
            .class(modifier("switch", self.size.as_str()))
            .class_if(modifier("switch", "checked"), on)
            .class_if(modifier("switch", "disabled"), self.disabled)
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("gap", px(shared::spacing(&theme, "sm")))
            .style("cursor", if self.disabled { "default" } else { "pointer" })
            .when(self.disabled, |e| e.style("opacity", "0.6"));

        if !self.disabled {
            let toggle = {
                let value = value.clone();
                let on_change = self.on_change.clone();
                move || {
                    value.set(!on);
                    if let Some(on_change) = &on_change {
                        on_change(!on);
                    }
                }
            };
            let on_key = toggle.clone();
            track = track.on(event_types::KEY_DOWN, move |event| {
                if matches!(event.key(), Some((KeyCode::SPACE | KeyCode::ENTER, _))) {
                    on_key();
                }
            });
            root = root.on_click(move |_| toggle());
        }

        root.child(track).child_opt(self.label.as_ref().map(|label| {
            el("span")
                .class(part("switch", "label"))
                .styles(&shared::text_style(&theme, TextVariant::Body1))
                .child(label.as_str())
        }))
    }
}

pub fn switch() -> Switch {
    Switch::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Event, Modifiers};
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    fn thumb_left(el: &Element) -> String {
        el.find_by_class("lumen-switch__thumb")
            .and_then(|thumb| thumb.style_value("left"))
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_thumb_moves_when_checked() {
        let cx = cx();
        assert_eq!(thumb_left(&switch().build(&cx)), "2px");
        assert_eq!(thumb_left(&switch().checked(true).build(&cx)), "18px");
    }

    #[test]
    fn test_uncontrolled_toggle() {
        let cx = cx();
        let sw = switch().id("wifi");
        sw.build(&cx).dispatch(&Event::click());
        let el = sw.build(&cx);
        assert!(el.has_class("lumen-switch--checked"));
        el.find_by_attr("role", "switch")
            .unwrap()
            .dispatch(&Event::key_down(KeyCode::ENTER, Modifiers::NONE));
        assert!(!sw.build(&cx).has_class("lumen-switch--checked"));
    }

    #[test]
    fn test_disabled_switch() {
        let el = switch().disabled(true).build(&cx());
        assert!(!el.dispatch(&Event::click()));
        assert_eq!(el.style_value("opacity"), Some("0.6"));
    }
}
