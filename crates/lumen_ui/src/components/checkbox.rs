//! Checkbox component for boolean selection
//!
//! Checked, unchecked and indeterminate states; controlled (`checked` plus
//! `on_change`) or uncontrolled with the state keyed by the checkbox id.
//!
//! An indeterminate checkbox shows a dash and reports `aria-checked="mixed"`.
//! Clicking it always reports `true`.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Event;
//! use lumen_ui::prelude::*;
//!
//! let cx = BuildContext::new().with_theme(Theme::light());
//! let terms = checkbox().id("terms").label("Accept terms");
//!
//! terms.build(&cx).dispatch(&Event::click());
//! let el = terms.build(&cx);
//! let control = el.find_by_attr("role", "checkbox").unwrap();
//! assert_eq!(control.get_attr("aria-checked"), Some("true"));
//! ```

use std::sync::Arc;

use lumen_core::{el, event_types, px, Element, KeyCode};
use lumen_theme::{Palette, TextVariant};

use super::form_control::FieldContext;
use super::shared::{self, class, modifier, part, svg_icon, ComponentSize};
use crate::context::{BuildContext, ElementBuilder};
use crate::hooks::use_controlled_id;

const CHECK_PATH: &str = "M9 16.17 4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z";
const DASH_PATH: &str = "M19 13H5v-2h14v2z";

pub(crate) type ToggleHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// Visual state of a checkbox
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    /// `aria-checked` value
    pub fn aria(self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Checked => "true",
            Self::Indeterminate => "mixed",
        }
    }

    /// Value reported when the box is clicked
    pub fn next(self) -> bool {
        match self {
            Self::Unchecked | Self::Indeterminate => true,
            Self::Checked => false,
        }
    }
}

/// Checkbox component
#[derive(Clone)]
pub struct Checkbox {
    id: Option<String>,
    name: Option<String>,
    checked: Option<bool>,
    default_checked: bool,
    indeterminate: bool,
    label: Option<String>,
    disabled: bool,
    required: bool,
    error: bool,
    color: Palette,
    size: ComponentSize,
    on_change: Option<ToggleHandler>,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            checked: None,
            default_checked: false,
            indeterminate: false,
            label: None,
            disabled: false,
            required: false,
            error: false,
            color: Palette::Primary,
            size: ComponentSize::default(),
            on_change: None,
        }
    }
}

impl Checkbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element id; also keys the uncontrolled state
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Controlled checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = checked;
        self
    }

    /// Show the mixed state regardless of `checked`
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
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

    /// Take error/disabled/required/size and id from a form control
    pub fn field(mut self, field: &FieldContext) -> Self {
        if field.id.is_some() {
            self.id = field.id.clone();
        }
        self.error |= field.error;
        self.disabled |= field.disabled;
        self.required |= field.required;
        self.size = field.size;
        self
    }
}

impl ElementBuilder for Checkbox {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let value = use_controlled_id(
            cx,
            "checkbox",
            self.id.as_deref(),
            self.checked,
            self.default_checked,
        );
        let state = match (self.indeterminate, value.get()) {
            (true, _) => CheckState::Indeterminate,
            (false, true) => CheckState::Checked,
            (false, false) => CheckState::Unchecked,
        };
        let on = state != CheckState::Unchecked;

        let accent = if self.disabled {
            shared::color(&theme, "text.disabled")
        } else if self.error {
            shared::palette(&theme, Palette::Error, "main")
        } else {
            shared::palette(&theme, self.color, "main")
        };
        let rest = if self.disabled {
            shared::color(&theme, "text.disabled")
        } else {
            shared::color(&theme, "text.secondary")
        };
        let edge = self.size.control_px();

        let icon = match state {
            CheckState::Checked => Some(svg_icon(CHECK_PATH, edge * 0.8).class(part("checkbox", "check"))),
            CheckState::Indeterminate => Some(svg_icon(DASH_PATH, edge * 0.8).class(part("checkbox", "dash"))),
            CheckState::Unchecked => None,
        };

        let mut control = el("span")
            .class(part("checkbox", "control"))
            .attr("role", "checkbox")
            .attr("aria-checked", state.aria())
            .attr_opt("id", self.id.clone())
            .attr_opt("data-name", self.name.clone())
            .attr("tabindex", if self.disabled { "-1" } else { "0" })
            .when(self.disabled, |e| e.attr("aria-disabled", "true"))
            .when(self.required, |e| e.attr("aria-required", "true"))
            .when(self.error, |e| e.attr("aria-invalid", "true"))
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("box-sizing", "border-box")
            .style("width", px(edge))
            .style("height", px(edge))
            .style("border-radius", px(shared::radius(&theme, "sm")))
            .style(
                "border",
                format!("2px solid {}", (if on { accent } else { rest }).to_css()),
            )
            .style(
                "background-color",
                if on { accent.to_css() } else { "transparent".to_string() },
            )
            .style("color", shared::palette(&theme, self.color, "contrastText").to_css())
            .child_opt(icon);

        let mut root = el("label")
            .class(class("checkbox"))
            .class(modifier("checkbox", self.size.as_str()))
            .class_if(modifier("checkbox", "checked"), state == CheckState::Checked)
            .class_if(modifier("checkbox", "indeterminate"), state == CheckState::Indeterminate)
            .class_if(modifier("checkbox", "disabled"), self.disabled)
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("gap", px(shared::spacing(&theme, "sm")))
            .style("cursor", if self.disabled { "default" } else { "pointer" });

        if !self.disabled {
            let toggle = {
                let value = value.clone();
                let on_change = self.on_change.clone();
                move || {
                    let next = state.next();
                    value.set(next);
                    if let Some(on_change) = &on_change {
                        on_change(next);
                    }
                }
            };
            let on_key = toggle.clone();
            control = control.on(event_types::KEY_DOWN, move |event| {
                if matches!(event.key(), Some((KeyCode::SPACE, _))) {
                    on_key();
                }
            });
            root = root.on_click(move |_| toggle());
        }

        root.child(control).child_opt(self.label.as_ref().map(|label| {
            el("span")
                .class(part("checkbox", "label"))
                .styles(&shared::text_style(&theme, TextVariant::Body1))
                .style(
                    "color",
                    shared::color(&theme, if self.disabled { "text.disabled" } else { "text.primary" })
                        .to_css(),
                )
                .child(label.as_str())
        }))
    }
}

pub fn checkbox() -> Checkbox {
    Checkbox::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Event, Modifiers};
    use lumen_theme::Theme;
    use std::sync::Mutex;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    fn control(el: &Element) -> &Element {
        el.find_by_attr("role", "checkbox").unwrap()
    }

    #[test]
    fn test_aria_states() {
        let cx = cx();
        assert_eq!(control(&checkbox().build(&cx)).get_attr("aria-checked"), Some("false"));
        assert_eq!(control(&checkbox().checked(true).build(&cx)).get_attr("aria-checked"), Some("true"));
        let mixed = checkbox().checked(false).indeterminate(true).build(&cx);
        assert_eq!(control(&mixed).get_attr("aria-checked"), Some("mixed"));
        assert!(mixed.find_by_class("lumen-checkbox__dash").is_some());
        assert!(mixed.find_by_class("lumen-checkbox__check").is_none());
    }

    #[test]
    fn test_indeterminate_click_reports_true() {
        let seen = Arc::new(Mutex::new(None));
        let log = seen.clone();
        let el = checkbox()
            .checked(true)
            .indeterminate(true)
            .on_change(move |checked| *log.lock().unwrap() = Some(checked))
            .build(&cx());
        el.dispatch(&Event::click());
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }

    #[test]
    fn test_uncontrolled_toggle_round_trip() {
        let cx = cx();
        let cb = checkbox().id("c");
        cb.build(&cx).dispatch(&Event::click());
        assert_eq!(control(&cb.build(&cx)).get_attr("aria-checked"), Some("true"));
        cb.build(&cx).dispatch(&Event::click());
        assert_eq!(control(&cb.build(&cx)).get_attr("aria-checked"), Some("false"));
    }

    #[test]
    fn test_space_toggles() {
        let cx = cx();
        let cb = checkbox().id("k");
        control(&cb.build(&cx)).dispatch(&Event::key_down(KeyCode::SPACE, Modifiers::NONE));
        assert_eq!(control(&cb.build(&cx)).get_attr("aria-checked"), Some("true"));
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let el = checkbox().disabled(true).on_change(|_| panic!("changed")).build(&cx());
        assert!(!el.dispatch(&Event::click()));
        assert_eq!(control(&el).get_attr("tabindex"), Some("-1"));
    }

    #[test]
    fn test_label_and_size() {
        let el = checkbox().label("Remember me").size(ComponentSize::Large).build(&cx());
        assert_eq!(el.text_content(), "Remember me");
        assert_eq!(control(&el).style_value("width"), Some("24px"));
    }
}
