//! Radio buttons
//!
//! A [`Radio`] is a single option; a [`RadioGroup`] owns a set of options and
//! guarantees at most one is selected. The group value is controlled
//! (`value` plus `on_change`) or kept in keyed hook state under the group
//! name.

use std::sync::Arc;

use lumen_core::{el, event_types, px, Element, KeyCode};
use lumen_theme::{Palette, TextVariant};

use super::form_control::FieldContext;
use super::shared::{self, class, modifier, part, ComponentSize};
use crate::context::{BuildContext, ElementBuilder};
use crate::hooks::use_controlled_id;

type SelectHandler = Arc<dyn Fn(&str) + Send + Sync>;

// ========== Radio ==========

/// One radio option
#[derive(Clone)]
pub struct Radio {
    value: String,
    label: Option<String>,
    name: Option<String>,
    checked: bool,
    disabled: bool,
    color: Palette,
    size: ComponentSize,
    on_select: Option<SelectHandler>,
}

impl Radio {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            name: None,
            checked: false,
            disabled: false,
            color: Palette::Primary,
            size: ComponentSize::default(),
            on_select: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
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

    /// Called with this radio's value when it is picked
    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ElementBuilder for Radio {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let edge = self.size.control_px();
        let ring = if self.disabled {
            shared::color(&theme, "text.disabled")
        } else if self.checked {
            shared::palette(&theme, self.color, "main")
        } else {
            shared::color(&theme, "text.secondary")
        };

        let dot = self.checked.then(|| {
            el("span")
                .class(part("radio", "dot"))
                .style("width", px(edge / 2.0))
                .style("height", px(edge / 2.0))
                .style("border-radius", "50%")
                .style("background-color", ring.to_css())
        });

        let mut control = el("span")
            .class(part("radio", "control"))
            .attr("role", "radio")
            .attr("aria-checked", if self.checked { "true" } else { "false" })
            .attr("data-value", self.value.as_str())
            .attr_opt("data-name", self.name.clone())
            .attr("tabindex", if self.disabled || !self.checked { "-1" } else { "0" })
            .when(self.disabled, |e| e.attr("aria-disabled", "true"))
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("box-sizing", "border-box")
            .style("width", px(edge))
            .style("height", px(edge))
            .style("border-radius", "50%")
            .style("border", format!("2px solid {}", ring.to_css()))
            .child_opt(dot);

        let mut root = el("label")
            .class(class("radio"))
            .class_if(modifier("radio", "checked"), self.checked)
            .class_if(modifier("radio", "disabled"), self.disabled)
            .attr("data-value", self.value.as_str())
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("gap", px(shared::spacing(&theme, "sm")))
            .style("cursor", if self.disabled { "default" } else { "pointer" });

        // Picking the selected radio again changes nothing
        if let (Some(handler), false, false) = (&self.on_select, self.disabled, self.checked) {
            let on_click = Arc::clone(handler);
            let on_key = Arc::clone(handler);
            let click_value = self.value.clone();
            let key_value = self.value.clone();
            root = root.on_click(move |_| on_click(&click_value));
            control = control.on(event_types::KEY_DOWN, move |event| {
                if matches!(event.key(), Some((KeyCode::SPACE, _))) {
                    on_key(&key_value);
                }
            });
        }

        root.child(control).child_opt(self.label.as_ref().map(|label| {
            el("span")
                .class(part("radio", "label"))
                .styles(&shared::text_style(&theme, TextVariant::Body1))
                .child(label.as_str())
        }))
    }
}

pub fn radio(value: impl Into<String>) -> Radio {
    Radio::new(value)
}

// ========== RadioGroup ==========

/// Option of a radio group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl RadioOption {
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

/// Single-selection set of radios
#[derive(Clone)]
pub struct RadioGroup {
    name: String,
    options: Vec<RadioOption>,
    value: Option<Option<String>>,
    default_value: Option<String>,
    row: bool,
    disabled: bool,
    color: Palette,
    size: ComponentSize,
    on_change: Option<SelectHandler>,
}

impl RadioGroup {
    /// `name` is shared by the radios and keys the uncontrolled selection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            value: None,
            default_value: None,
            row: false,
            disabled: false,
            color: Palette::Primary,
            size: ComponentSize::default(),
            on_change: None,
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(RadioOption::new(value, label));
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = RadioOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Controlled selection (`None` selects nothing)
    pub fn value(mut self, value: Option<&str>) -> Self {
        self.value = Some(value.map(str::to_string));
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Lay options out horizontally
    pub fn row(mut self, row: bool) -> Self {
        self.row = row;
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
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Take disabled/size from a form control
    pub fn field(mut self, field: &FieldContext) -> Self {
        self.disabled |= field.disabled;
        self.size = field.size;
        self
    }
}

impl ElementBuilder for RadioGroup {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let selection = use_controlled_id(
            cx,
            "radio-group",
            Some(self.name.as_str()),
            self.value.clone(),
            self.default_value.clone(),
        );
        let current = selection.get();

        let radios = self.options.iter().map(|option| {
            let selection = selection.clone();
            let on_change = self.on_change.clone();
            radio(option.value.as_str())
                .label(option.label.as_str())
                .name(self.name.as_str())
                .checked(current.as_deref() == Some(option.value.as_str()))
                .disabled(self.disabled || option.disabled)
                .color(self.color)
                .size(self.size)
                .on_select(move |value| {
                    selection.set(Some(value.to_string()));
                    if let Some(on_change) = &on_change {
                        on_change(value);
                    }
                })
                .build(cx)
        });

        el("div")
            .class(class("radio-group"))
            .class_if(modifier("radio-group", "row"), self.row)
            .attr("role", "radiogroup")
            .attr("data-name", self.name.as_str())
            .style("display", "flex")
            .style("flex-direction", if self.row { "row" } else { "column" })
            .style("gap", px(shared::spacing(&theme, "xs")))
            .children(radios)
    }
}

pub fn radio_group(name: impl Into<String>) -> RadioGroup {
    RadioGroup::new(name)
}
