//! Chip
//!
//! Compact label that can be clickable, deletable, or both. Deleting happens
//! through the trailing icon or Backspace/Delete while the chip has focus.

use std::sync::Arc;

use lumen_core::{el, event_types, px, Element, Event, KeyCode};
use lumen_theme::{Palette, TextVariant};

use super::button::ClickHandler;
use super::shared::{self, class, modifier, part, svg_icon, ComponentSize};
use crate::context::{BuildContext, Child, ElementBuilder};

const CANCEL_PATH: &str = "M12 2C6.47 2 2 6.47 2 12s4.47 10 10 10 10-4.47 10-10S17.53 2 12 2zm5 13.59L15.59 17 12 13.41 8.41 17 7 15.59 10.59 12 7 8.41 8.41 7 12 10.59 15.59 7 17 8.41 13.41 12 17 15.59z";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipVariant {
    #[default]
    Filled,
    Outlined,
}

impl ChipVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ChipVariant::Filled => "filled",
            ChipVariant::Outlined => "outlined",
        }
    }
}

#[derive(Clone)]
pub struct Chip {
    label: String,
    icon: Option<Child>,
    variant: ChipVariant,
    color: Option<Palette>,
    size: ComponentSize,
    disabled: bool,
    on_click: Option<ClickHandler>,
    on_delete: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Chip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            variant: ChipVariant::default(),
            color: None,
            size: ComponentSize::Medium,
            disabled: false,
            on_click: None,
            on_delete: None,
        }
    }

    /// Leading icon or avatar
    pub fn icon(mut self, icon: impl Into<Child>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: ChipVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn outlined(self) -> Self {
        self.variant(ChipVariant::Outlined)
    }

    /// Palette color; grey when unset
    pub fn color(mut self, color: Palette) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Makes the chip clickable
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Makes the chip deletable
    pub fn on_delete<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_delete = Some(Arc::new(handler));
        self
    }

    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn is_deletable(&self) -> bool {
        self.on_delete.is_some()
    }
}

impl ElementBuilder for Chip {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let small = self.size == ComponentSize::Small;
        let height = if small { 24.0 } else { 32.0 };
        let interactive = !self.disabled;

        let (background, foreground, border) = match (self.variant, self.color) {
            (ChipVariant::Filled, Some(palette)) => (
                shared::palette(&theme, palette, "main").to_css(),
                shared::palette(&theme, palette, "contrastText").to_css(),
                "none".to_string(),
            ),
            (ChipVariant::Filled, None) => (
                shared::color(&theme, "grey.200").to_css(),
                shared::color(&theme, "text.primary").to_css(),
                "none".to_string(),
            ),
            (ChipVariant::Outlined, Some(palette)) => (
                "transparent".to_string(),
                shared::palette(&theme, palette, "main").to_css(),
                format!("1px solid {}", shared::palette(&theme, palette, "main").with_alpha(0.7).to_css()),
            ),
            (ChipVariant::Outlined, None) => (
                "transparent".to_string(),
                shared::color(&theme, "text.primary").to_css(),
                format!("1px solid {}", shared::color(&theme, "grey.400").to_css()),
            ),
        };

        let mut root = el("div")
            .class(class("chip"))
            .class(modifier("chip", self.variant.as_str()))
            .class(modifier("chip", self.size.as_str()))
            .class_if(modifier("chip", "clickable"), self.is_clickable())
            .class_if(modifier("chip", "deletable"), self.is_deletable())
            .class_if(modifier("chip", "disabled"), self.disabled)
            .styles(&shared::text_style(&theme, TextVariant::Body2))
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("box-sizing", "border-box")
            .style("height", px(height))
            .style("max-width", "100%")
            .style("border-radius", px(height / 2.0))
            .style("white-space", "nowrap")
            .style("background-color", background)
            .style("color", foreground)
            .style("border", border)
            .style("cursor", if self.is_clickable() && interactive { "pointer" } else { "default" })
            .when(self.disabled, |e| {
                e.attr("aria-disabled", "true")
                    .style("opacity", "0.38")
                    .style("pointer-events", "none")
            })
            .when(self.is_clickable(), |e| e.attr("role", "button"))
            .when(
                interactive && (self.is_clickable() || self.is_deletable()),
                |e| e.attr("tabindex", "0"),
            )
            .child_opt(self.icon.as_ref().map(|icon| {
                el("span")
                    .class(part("chip", "icon"))
                    .style("display", "flex")
                    .style("margin-left", if small { "4px" } else { "5px" })
                    .style("margin-right", if small { "-4px" } else { "-6px" })
                    .child(icon.build(cx))
            }))
            .child(
                el("span")
                    .class(part("chip", "label"))
                    .style("overflow", "hidden")
                    .style("text-overflow", "ellipsis")
                    .style("padding", if small { "0 8px" } else { "0 12px" })
                    .child(self.label.as_str()),
            );

        if let Some(on_delete) = &self.on_delete {
            let mut delete = svg_icon(CANCEL_PATH, if small { 16.0 } else { 22.0 })
                .class(part("chip", "delete"))
                .attr("aria-hidden", "false")
                .attr("aria-label", format!("Delete {}", self.label))
                .style("margin", if small { "0 4px 0 -4px" } else { "0 5px 0 -6px" })
                .style("opacity", "0.7")
                .style("cursor", "pointer");
            if interactive {
                let on_icon = Arc::clone(on_delete);
                delete = delete.on_click(move |_| on_icon());
                let on_key = Arc::clone(on_delete);
                root = root.on(event_types::KEY_DOWN, move |event| {
                    if matches!(event.key(), Some((KeyCode::BACKSPACE | KeyCode::DELETE, _))) {
                        on_key();
                    }
                });
            }
            root = root.child(delete);
        }

        if let (true, Some(on_click)) = (interactive, &self.on_click) {
            let on_click = Arc::clone(on_click);
            root = root.on_click(move |event| on_click(event));
        }

        root
    }
}

pub fn chip(label: impl Into<String>) -> Chip {
    Chip::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Modifiers;
    use lumen_theme::Theme;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_delete_icon_and_keys() {
        let deleted = Arc::new(AtomicUsize::new(0));
        let counter = deleted.clone();
        let el = chip("Rust")
            .on_delete(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build(&cx());

        assert!(el.has_class("lumen-chip--deletable"));
        el.find_by_class("lumen-chip__delete").unwrap().dispatch(&Event::click());
        el.dispatch(&Event::key_down(KeyCode::BACKSPACE, Modifiers::NONE));
        el.dispatch(&Event::key_down(KeyCode::ENTER, Modifiers::NONE));
        assert_eq!(deleted.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_plain_chip_is_not_interactive() {
        let el = chip("Tag").build(&cx());
        assert_eq!(el.get_attr("role"), None);
        assert_eq!(el.get_attr("tabindex"), None);
        assert!(!el.dispatch(&Event::click()));
    }

    #[test]
    fn test_disabled_chip_ignores_clicks() {
        let el = chip("Tag").on_click(|_| {}).disabled(true).build(&cx());
        assert_eq!(el.get_attr("role"), Some("button"));
        assert!(!el.dispatch(&Event::click()));
    }
}
