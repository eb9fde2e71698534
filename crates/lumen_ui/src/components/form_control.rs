//! Form control composition
//!
//! [`FormControl`] lays out a label, one control and helper text. The shared
//! field state (error, disabled, required, size, ids) reaches the control as a
//! [`FieldContext`] handed to the control's builder closure; the control
//! applies it with its own `field` method.
//!
//! ```rust
//! use lumen_ui::prelude::*;
//!
//! let cx = BuildContext::new().with_theme(Theme::light());
//! let email = form_control()
//!     .id("email")
//!     .label("Email")
//!     .required(true)
//!     .error(true)
//!     .helper_text("Enter a valid address")
//!     .control(|field| input().field(field).into());
//!
//! let el = email.build(&cx);
//! let control = el.find_by_attr("id", "email").unwrap();
//! assert_eq!(control.get_attr("aria-invalid"), Some("true"));
//! assert_eq!(control.get_attr("aria-describedby"), Some("email-helper-text"));
//! ```

use std::sync::Arc;

use lumen_core::{el, px, Element};
use lumen_theme::{Palette, TextVariant};

use super::shared::{self, class, modifier, part, ComponentSize};
use crate::context::{BuildContext, Child, ElementBuilder};

/// Field state a form control hands to its control
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldContext {
    pub id: Option<String>,
    pub error: bool,
    pub disabled: bool,
    pub required: bool,
    pub size: ComponentSize,
    pub full_width: bool,
    /// Id of the helper text element, for `aria-describedby`
    pub helper_id: Option<String>,
}

type ControlBuilder = Arc<dyn Fn(&FieldContext) -> Child + Send + Sync>;

/// Label + control + helper text
#[derive(Clone, Default)]
pub struct FormControl {
    field: FieldContext,
    label: Option<String>,
    helper_text: Option<String>,
    control: Option<ControlBuilder>,
}

impl FormControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the control; the label and helper text reference it
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.field.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.field.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.field.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.field.required = required;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.field.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.field.full_width = full_width;
        self
    }

    /// Builder for the control, called with the field state on every build
    pub fn control<F>(mut self, control: F) -> Self
    where
        F: Fn(&FieldContext) -> Child + Send + Sync + 'static,
    {
        self.control = Some(Arc::new(control));
        self
    }

    /// Field state passed to the control
    pub fn field_context(&self) -> FieldContext {
        let mut field = self.field.clone();
        if self.helper_text.is_some() {
            field.helper_id = field.id.as_ref().map(|id| format!("{id}-helper-text"));
        }
        field
    }
}

impl ElementBuilder for FormControl {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let field = self.field_context();
        let tone = |rest: &str| {
            if field.disabled {
                shared::color(&theme, "text.disabled")
            } else if field.error {
                shared::palette(&theme, Palette::Error, "main")
            } else {
                shared::color(&theme, rest)
            }
        };

        let label = self.label.as_ref().map(|label| {
            el("label")
                .class(part("form-control", "label"))
                .attr_opt("for", field.id.clone())
                .styles(&shared::text_style(&theme, TextVariant::Body2))
                .style("color", tone("text.secondary").to_css())
                .style("margin-bottom", px(shared::spacing(&theme, "xs")))
                .child(label.as_str())
                .when(field.required, |e| {
                    e.child(
                        el("span")
                            .class(part("form-control", "asterisk"))
                            .attr("aria-hidden", "true")
                            .child(" *"),
                    )
                })
        });

        let helper = self.helper_text.as_ref().map(|text| {
            el("p")
                .class(part("form-control", "helper-text"))
                .attr_opt("id", field.helper_id.clone())
                .styles(&shared::text_style(&theme, TextVariant::Caption))
                .style("color", tone("text.secondary").to_css())
                .style("margin", format!("{} 14px 0", px(shared::spacing(&theme, "xs"))))
                .child(text.as_str())
        });

        let control = self.control.as_ref().map(|control| control(&field).build(cx));

        el("div")
            .class(class("form-control"))
            .class_if(modifier("form-control", "error"), field.error)
            .class_if(modifier("form-control", "disabled"), field.disabled)
            .style("display", if field.full_width { "flex" } else { "inline-flex" })
            .style("flex-direction", "column")
            .style("position", "relative")
            .style("min-width", "0")
            .style("margin", "0")
            .style("border", "0")
            .style("vertical-align", "top")
            .when(field.full_width, |e| e.style("width", "100%"))
            .child_opt(label)
            .child_opt(control)
            .child_opt(helper)
    }
}

pub fn form_control() -> FormControl {
    FormControl::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::div;
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_field_context_reaches_control() {
        let fc = form_control()
            .id("name")
            .disabled(true)
            .size(ComponentSize::Small)
            .helper_text("help")
            .control(|field| {
                div()
                    .attr("data-disabled", field.disabled.to_string())
                    .attr("data-size", field.size.as_str())
                    .attr_opt("data-helper", field.helper_id.clone())
                    .into()
            });
        let el = fc.build(&cx());
        let control = el.find_by_attr("data-disabled", "true").unwrap();
        assert_eq!(control.get_attr("data-size"), Some("small"));
        assert_eq!(control.get_attr("data-helper"), Some("name-helper-text"));
    }

    #[test]
    fn test_required_asterisk_and_error_color() {
        let el = form_control().id("x").label("Name").required(true).error(true).build(&cx());
        let label = el.find_by_class("lumen-form-control__label").unwrap();
        assert_eq!(label.get_attr("for"), Some("x"));
        assert_eq!(label.text_content(), "Name *");
        assert_eq!(label.style_value("color"), Some("#d32f2f"));
    }

    #[test]
    fn test_no_helper_id_without_text() {
        assert_eq!(form_control().id("x").field_context().helper_id, None);
    }
}
