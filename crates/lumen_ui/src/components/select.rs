//! Select (dropdown) component
//!
//! A trigger showing the selected option (or a placeholder) and a listbox
//! menu. Both the value and the open state are controlled or kept in keyed
//! hook state under the select id. Picking an option closes the menu.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Event;
//! use lumen_ui::prelude::*;
//!
//! let cx = BuildContext::new().with_theme(Theme::light());
//! let size = select()
//!     .id("size")
//!     .placeholder("Choose a size")
//!     .option("s", "Small")
//!     .option("m", "Medium");
//!
//! // Open the menu, then pick an option
//! size.build(&cx).find_by_attr("role", "combobox").unwrap().dispatch(&Event::click());
//! size.build(&cx).find_by_attr("data-value", "m").unwrap().dispatch(&Event::click());
//!
//! let el = size.build(&cx);
//! assert_eq!(el.find_by_attr("role", "combobox").unwrap().text_content(), "Medium");
//! assert!(el.find_by_attr("role", "listbox").is_none());
//! ```

use std::sync::Arc;

use lumen_core::{el, event_types, px, Element, KeyCode};
use lumen_theme::TextVariant;

use super::form_control::FieldContext;
use super::input::ChangeHandler;
use super::shared::{self, class, modifier, part, svg_icon, ComponentSize, FieldState, FieldVariant};
use crate::context::{BuildContext, ElementBuilder};
use crate::hooks::use_controlled_id;

const CHEVRON_PATH: &str = "M7 10l5 5 5-5z";

/// One selectable option
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Clone, Default)]
pub struct Select {
    id: Option<String>,
    options: Vec<SelectOption>,
    placeholder: Option<String>,
    value: Option<Option<String>>,
    default_value: Option<String>,
    open: Option<bool>,
    variant: FieldVariant,
    size: ComponentSize,
    error: bool,
    disabled: bool,
    required: bool,
    full_width: bool,
    described_by: Option<String>,
    on_change: Option<ChangeHandler>,
    on_open_change: Option<Arc<dyn Fn(bool) + Send + Sync>>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element id; also keys the uncontrolled value and open state
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Shown while nothing is selected
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Controlled value (`None` selects nothing)
    pub fn value(mut self, value: Option<&str>) -> Self {
        self.value = Some(value.map(str::to_string));
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Controlled open state
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn on_open_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_open_change = Some(Arc::new(handler));
        self
    }

    /// Take error/disabled/required/size and ids from a form control
    pub fn field(mut self, field: &FieldContext) -> Self {
        if field.id.is_some() {
            self.id = field.id.clone();
        }
        self.error |= field.error;
        self.disabled |= field.disabled;
        self.required |= field.required;
        self.full_width |= field.full_width;
        self.size = field.size;
        if field.helper_id.is_some() {
            self.described_by = field.helper_id.clone();
        }
        self
    }

    fn label_of(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

impl ElementBuilder for Select {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let id = self.id.as_deref();
        let value = use_controlled_id(cx, "select", id, self.value.clone(), self.default_value.clone());
        let open_state = use_controlled_id(cx, "select-open", id, self.open, false);
        let current = value.get();
        let open = open_state.get() && !self.disabled;

        let selected_label = current.as_deref().and_then(|value| self.label_of(value));
        let shown = match (selected_label, &self.placeholder) {
            (Some(label), _) => el("span").class(part("select", "value")).child(label),
            (None, Some(placeholder)) => el("span")
                .class(part("select", "placeholder"))
                .style("color", shared::color(&theme, "text.disabled").to_css())
                .child(placeholder.as_str()),
            (None, None) => el("span").class(part("select", "value")),
        };

        let state = FieldState {
            error: self.error,
            disabled: self.disabled,
            focused: open,
        };
        let mut field = shared::field_style(&theme, self.variant, self.size, state);
        field.insert("justify-content", "space-between");
        field.insert("gap", px(shared::spacing(&theme, "sm")));
        field.insert("width", "100%");
        field.insert("cursor", if self.disabled { "default" } else { "pointer" });

        let set_open = {
            let open_state = open_state.clone();
            let on_open_change = self.on_open_change.clone();
            move |next: bool| {
                open_state.set(next);
                if let Some(handler) = &on_open_change {
                    handler(next);
                }
            }
        };

        let mut trigger = el("div")
            .class(part("select", "trigger"))
            .attr("role", "combobox")
            .attr_opt("id", self.id.clone())
            .attr("aria-haspopup", "listbox")
            .attr("aria-expanded", if open { "true" } else { "false" })
            .attr_opt("aria-controls", self.id.as_ref().map(|id| format!("{id}-listbox")))
            .attr_opt("aria-describedby", self.described_by.clone())
            .attr("tabindex", if self.disabled { "-1" } else { "0" })
            .when(self.disabled, |e| e.attr("aria-disabled", "true"))
            .when(self.required, |e| e.attr("aria-required", "true"))
            .when(self.error, |e| e.attr("aria-invalid", "true"))
            .styles(&field)
            .child(shown)
            .child(
                svg_icon(CHEVRON_PATH, self.size.icon_px())
                    .class(part("select", "icon"))
                    .style("transform", if open { "rotate(180deg)" } else { "none" }),
            );

        if !self.disabled {
            let on_click = set_open.clone();
            let on_key = set_open.clone();
            trigger = trigger
                .on_click(move |_| on_click(!open))
                .on(event_types::KEY_DOWN, move |event| match event.key() {
                    Some((KeyCode::ESCAPE, _)) if open => on_key(false),
                    Some((KeyCode::ENTER | KeyCode::SPACE | KeyCode::DOWN, _)) if !open => on_key(true),
                    _ => {}
                });
        }

        let menu = open.then(|| {
            let items = self.options.iter().map(|option| {
                let selected = current.as_deref() == Some(option.value.as_str());
                let mut item = el("li")
                    .class(part("select", "option"))
                    .class_if(modifier("select", "option-selected"), selected)
                    .attr("role", "option")
                    .attr("data-value", option.value.as_str())
                    .attr("aria-selected", if selected { "true" } else { "false" })
                    .when(option.disabled, |e| e.attr("aria-disabled", "true"))
                    .styles(&shared::text_style(&theme, TextVariant::Body1))
                    .style("padding", format!("6px {}", px(shared::spacing(&theme, "md"))))
                    .style("cursor", if option.disabled { "default" } else { "pointer" })
                    .when(selected, |e| {
                        e.style(
                            "background-color",
                            shared::color(&theme, "primary.main").with_alpha(0.08).to_css(),
                        )
                    })
                    .when(option.disabled, |e| {
                        e.style("color", shared::color(&theme, "text.disabled").to_css())
                    })
                    .child(option.label.as_str());
                if !option.disabled {
                    let value = value.clone();
                    let on_change = self.on_change.clone();
                    let close = set_open.clone();
                    let picked = option.value.clone();
                    item = item.on_click(move |_| {
                        value.set(Some(picked.clone()));
                        if let Some(on_change) = &on_change {
                            on_change(&picked);
                        }
                        close(false);
                    });
                }
                item
            });

            el("ul")
                .class(part("select", "menu"))
                .attr("role", "listbox")
                .attr_opt("id", self.id.as_ref().map(|id| format!("{id}-listbox")))
                .style("position", "absolute")
                .style("top", "100%")
                .style("left", "0")
                .style("right", "0")
                .style("margin", "4px 0 0")
                .style("padding", format!("{} 0", px(shared::spacing(&theme, "sm"))))
                .style("list-style", "none")
                .style("max-height", "300px")
                .style("overflow-y", "auto")
                .style("z-index", shared::z_index(&theme, "modal").to_string())
                .style("background-color", shared::color(&theme, "background.paper").to_css())
                .style("border-radius", px(shared::radius(&theme, "md")))
                .style("box-shadow", shared::shadow(&theme, "md"))
                .children(items)
        });

        el("div")
            .class(class("select"))
            .class(modifier("select", self.variant.as_str()))
            .class_if(modifier("select", "open"), open)
            .class_if(modifier("select", "disabled"), self.disabled)
            .style("position", "relative")
            .style("display", if self.full_width { "flex" } else { "inline-flex" })
            .style("min-width", "120px")
            .when(self.full_width, |e| e.style("width", "100%"))
            .child(trigger)
            .child_opt(menu)
    }
}

pub fn select() -> Select {
    Select::new()
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

    fn sizes() -> Select {
        select()
            .id("size")
            .placeholder("Pick")
            .option("s", "Small")
            .option("m", "Medium")
            .options([SelectOption::new("xl", "Huge").disabled(true)])
    }

    fn trigger(el: &Element) -> &Element {
        el.find_by_attr("role", "combobox").unwrap()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let el = sizes().build(&cx());
        assert_eq!(trigger(&el).text_content(), "Pick");
        assert_eq!(trigger(&el).get_attr("aria-expanded"), Some("false"));
        assert!(el.find_by_attr("role", "listbox").is_none());
    }

    #[test]
    fn test_keyboard_open_and_escape() {
        let cx = cx();
        let s = sizes();
        trigger(&s.build(&cx)).dispatch(&Event::key_down(KeyCode::DOWN, Modifiers::NONE));
        let el = s.build(&cx);
        assert_eq!(el.find_all(|e| e.get_attr("role") == Some("option")).len(), 3);
        trigger(&el).dispatch(&Event::key_down(KeyCode::ESCAPE, Modifiers::NONE));
        assert!(s.build(&cx).find_by_attr("role", "listbox").is_none());
    }

    #[test]
    fn test_disabled_option_ignored() {
        let cx = cx();
        let s = sizes().open(true);
        let el = s.build(&cx);
        assert!(!el.find_by_attr("data-value", "xl").unwrap().dispatch(&Event::click()));
        assert_eq!(trigger(&s.build(&cx)).text_content(), "Pick");
    }

    #[test]
    fn test_controlled_value_and_callbacks() {
        let picked = Arc::new(Mutex::new(Vec::new()));
        let log = picked.clone();
        let cx = cx();
        let s = sizes()
            .value(Some("s"))
            .open(true)
            .on_change(move |v| log.lock().unwrap().push(v.to_string()));
        s.build(&cx).find_by_attr("data-value", "m").unwrap().dispatch(&Event::click());
        assert_eq!(*picked.lock().unwrap(), vec!["m".to_string()]);

        let el = s.build(&cx);
        assert_eq!(trigger(&el).text_content(), "Small");
        // Controlled open state stays open
        assert!(el.find_by_attr("role", "listbox").is_some());
    }

    #[test]
    fn test_disabled_select_never_opens() {
        let el = sizes().disabled(true).open(true).build(&cx());
        assert!(el.find_by_attr("role", "listbox").is_none());
        assert!(!trigger(&el).dispatch(&Event::click()));
    }
}
