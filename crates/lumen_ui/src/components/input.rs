//! Text fields
//!
//! [`Input`] is a single-line field and [`Textarea`] a multi-line one. Both
//! share the field variant/size chrome from `shared::field_style`, start and
//! end adornments, and a value that is either controlled (`value` plus
//! `on_change`) or kept in keyed hook state under the field id.
//!
//! ```rust
//! use lumen_core::Event;
//! use lumen_ui::prelude::*;
//!
//! let cx = BuildContext::new().with_theme(Theme::light());
//! let field = input().id("name").placeholder("Your name");
//!
//! let el = field.build(&cx);
//! el.find_by_attr("id", "name").unwrap().dispatch(&Event::input("Ada"));
//!
//! // Uncontrolled: the typed value survives the rebuild
//! let el = field.build(&cx);
//! assert_eq!(el.find_by_attr("id", "name").unwrap().get_attr("value"), Some("Ada"));
//! ```

use std::sync::Arc;

use lumen_core::{el, event_types, Element, Event, State, Style};

use super::form_control::FieldContext;
use super::shared::{self, class, modifier, part, ComponentSize, FieldState, FieldVariant};
use crate::context::{BuildContext, Child, ElementBuilder};
use crate::hooks::{use_controlled_id, Controlled};

pub(crate) type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Props common to every text field
#[derive(Clone, Default)]
struct FieldProps {
    id: Option<String>,
    name: Option<String>,
    value: Option<String>,
    default_value: String,
    placeholder: Option<String>,
    variant: FieldVariant,
    size: ComponentSize,
    error: bool,
    disabled: bool,
    required: bool,
    read_only: bool,
    full_width: bool,
    described_by: Option<String>,
    start_adornment: Option<Child>,
    end_adornment: Option<Child>,
    on_change: Option<ChangeHandler>,
}

impl FieldProps {
    fn value_state(&self, cx: &BuildContext, component: &str) -> Controlled<String> {
        use_controlled_id(
            cx,
            component,
            self.id.as_deref(),
            self.value.clone(),
            self.default_value.clone(),
        )
    }

    fn focus_state(&self, cx: &BuildContext, component: &str) -> State<bool> {
        match &self.id {
            Some(id) => cx.use_state_keyed(&format!("{component}:{id}#focused"), || false),
            None => State::new(false),
        }
    }

    fn apply_field(&mut self, field: &FieldContext) {
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
    }

    /// Attributes and handlers shared by `input` and `textarea`
    fn wire_control(
        &self,
        control: Element,
        value: &Controlled<String>,
        focused: &State<bool>,
    ) -> Element {
        let mut control = control
            .attr_opt("id", self.id.clone())
            .attr_opt("name", self.name.clone())
            .attr_opt("placeholder", self.placeholder.clone())
            .attr_opt("aria-describedby", self.described_by.clone())
            .flag("disabled", self.disabled)
            .flag("required", self.required)
            .flag("readonly", self.read_only)
            .when(self.error, |e| e.attr("aria-invalid", "true"))
            .style("flex", "1")
            .style("min-width", "0")
            .style("border", "0")
            .style("outline", "0")
            .style("background", "none")
            .style("padding", "0")
            .style("font", "inherit")
            .style("color", "inherit");

        if !self.disabled {
            let on_focus = focused.clone();
            let on_blur = focused.clone();
            control = control
                .on(event_types::FOCUS, move |_| on_focus.set(true))
                .on(event_types::BLUR, move |_| on_blur.set(false));
        }

        if !self.disabled && !self.read_only {
            let value = value.clone();
            let on_change = self.on_change.clone();
            control = control.on(event_types::INPUT, move |event: &Event| {
                let Some(next) = event.value() else {
                    return;
                };
                value.set(next.to_string());
                if let Some(on_change) = &on_change {
                    on_change(next);
                }
            });
        }
        control
    }

    fn adornment(&self, cx: &BuildContext, slot: &Option<Child>, position: &str) -> Option<Element> {
        let theme = cx.theme();
        slot.as_ref().map(|child| {
            el("span")
                .class(part("input", &format!("{position}-adornment")))
                .style("display", "flex")
                .style("align-items", "center")
                .style("white-space", "nowrap")
                .style("color", shared::color(&theme, "text.secondary").to_css())
                .style(
                    if position == "start" { "margin-right" } else { "margin-left" },
                    "8px",
                )
                .child(child.build(cx))
        })
    }

    /// Wrap the control in the field chrome
    fn root(
        &self,
        cx: &BuildContext,
        component: &str,
        control: Element,
        focused: bool,
    ) -> Element {
        let theme = cx.theme();
        let state = FieldState {
            error: self.error,
            disabled: self.disabled,
            focused,
        };
        let mut style = shared::field_style(&theme, self.variant, self.size, state);
        if self.full_width {
            style.insert("display", "flex");
            style.insert("width", "100%");
        }

        el("div")
            .class(class(component))
            .class(modifier(component, self.variant.as_str()))
            .class(modifier(component, self.size.as_str()))
            .class_if(modifier(component, "error"), self.error)
            .class_if(modifier(component, "disabled"), self.disabled)
            .class_if(modifier(component, "focused"), focused)
            .class_if(modifier(component, "full-width"), self.full_width)
            .styles(&style)
            .child_opt(self.adornment(cx, &self.start_adornment, "start"))
            .child(control)
            .child_opt(self.adornment(cx, &self.end_adornment, "end"))
    }
}

/// Generates the shared field setters on a type with a `props: FieldProps`
macro_rules! field_setters {
    () => {
        /// Element id; also keys uncontrolled state across rebuilds
        pub fn id(mut self, id: impl Into<String>) -> Self {
            self.props.id = Some(id.into());
            self
        }

        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.props.name = Some(name.into());
            self
        }

        /// Controlled value
        pub fn value(mut self, value: impl Into<String>) -> Self {
            self.props.value = Some(value.into());
            self
        }

        /// Initial value when uncontrolled
        pub fn default_value(mut self, value: impl Into<String>) -> Self {
            self.props.default_value = value.into();
            self
        }

        pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
            self.props.placeholder = Some(placeholder.into());
            self
        }

        pub fn variant(mut self, variant: FieldVariant) -> Self {
            self.props.variant = variant;
            self
        }

        pub fn size(mut self, size: ComponentSize) -> Self {
            self.props.size = size;
            self
        }

        pub fn error(mut self, error: bool) -> Self {
            self.props.error = error;
            self
        }

        pub fn disabled(mut self, disabled: bool) -> Self {
            self.props.disabled = disabled;
            self
        }

        pub fn required(mut self, required: bool) -> Self {
            self.props.required = required;
            self
        }

        pub fn read_only(mut self, read_only: bool) -> Self {
            self.props.read_only = read_only;
            self
        }

        pub fn full_width(mut self, full_width: bool) -> Self {
            self.props.full_width = full_width;
            self
        }

        pub fn start_adornment(mut self, adornment: impl Into<Child>) -> Self {
            self.props.start_adornment = Some(adornment.into());
            self
        }

        pub fn end_adornment(mut self, adornment: impl Into<Child>) -> Self {
            self.props.end_adornment = Some(adornment.into());
            self
        }

        pub fn on_change<F>(mut self, handler: F) -> Self
        where
            F: Fn(&str) + Send + Sync + 'static,
        {
            self.props.on_change = Some(Arc::new(handler));
            self
        }

        /// Take error/disabled/required/size and ids from a form control
        pub fn field(mut self, field: &FieldContext) -> Self {
            self.props.apply_field(field);
            self
        }
    };
}

// ========== Input ==========

/// Single-line text field
#[derive(Clone)]
pub struct Input {
    props: FieldProps,
    input_type: String,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            props: FieldProps::default(),
            input_type: "text".to_string(),
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML input type (`text`, `password`, `email`, ...)
    pub fn input_type(mut self, input_type: &str) -> Self {
        self.input_type = input_type.to_string();
        self
    }

    field_setters!();
}

impl ElementBuilder for Input {
    fn build(&self, cx: &BuildContext) -> Element {
        let value = self.props.value_state(cx, "input");
        let focused = self.props.focus_state(cx, "input");

        let control = el("input")
            .class(part("input", "input"))
            .attr("type", self.input_type.as_str())
            .attr("value", value.get());
        let control = self.props.wire_control(control, &value, &focused);
        self.props.root(cx, "input", control, focused.get())
    }
}

pub fn input() -> Input {
    Input::new()
}

// ========== Textarea ==========

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resize {
    None,
    #[default]
    Vertical,
    Horizontal,
    Both,
}

impl Resize {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Both => "both",
        }
    }
}

/// Line height of field text, in em
const FIELD_LINE_HEIGHT_EM: f32 = 1.4375;

/// Multi-line text field
#[derive(Clone)]
pub struct Textarea {
    props: FieldProps,
    rows: u32,
    max_rows: Option<u32>,
    resize: Resize,
}

impl Default for Textarea {
    fn default() -> Self {
        Self {
            props: FieldProps::default(),
            rows: 3,
            max_rows: None,
            resize: Resize::default(),
        }
    }
}

impl Textarea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible rows (at least 1)
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Grow up to this many rows, then scroll
    pub fn max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = Some(max_rows.max(1));
        self
    }

    pub fn resize(mut self, resize: Resize) -> Self {
        self.resize = resize;
        self
    }

    field_setters!();

    fn control_style(&self) -> Style {
        let rows = self.max_rows.map_or(self.rows, |max| self.rows.min(max));
        let mut style = Style::new()
            .set("resize", self.resize.as_css())
            .set("line-height", format!("{FIELD_LINE_HEIGHT_EM}em"))
            .set("min-height", format!("{}em", rows as f32 * FIELD_LINE_HEIGHT_EM));
        if let Some(max) = self.max_rows {
            style.insert("max-height", format!("{}em", max as f32 * FIELD_LINE_HEIGHT_EM));
            style.insert("overflow-y", "auto");
        }
        style
    }
}

impl ElementBuilder for Textarea {
    fn build(&self, cx: &BuildContext) -> Element {
        let value = self.props.value_state(cx, "textarea");
        let focused = self.props.focus_state(cx, "textarea");

        let rows = self.max_rows.map_or(self.rows, |max| self.rows.min(max));
        let control = el("textarea")
            .class(part("textarea", "input"))
            .attr("rows", rows.to_string())
            .child(value.get());
        let control = self
            .props
            .wire_control(control, &value, &focused)
            .styles(&self.control_style());
        self.props
            .root(cx, "textarea", control, focused.get())
            .style("align-items", "flex-start")
    }
}

pub fn textarea() -> Textarea {
    Textarea::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::Theme;
    use std::sync::Mutex;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    fn control(el: &Element) -> &Element {
        el.find_by_class("lumen-input__input").unwrap()
    }

    #[test]
    fn test_controlled_value_reports_changes() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let cx = cx();
        let field = input().id("q").value("fixed").on_change(move |v| {
            log.lock().unwrap().push(v.to_string());
        });

        control(&field.build(&cx)).dispatch(&Event::input("typed"));
        assert_eq!(*seen.lock().unwrap(), vec!["typed".to_string()]);
        // Still shows the prop until the owner passes a new one
        assert_eq!(control(&field.build(&cx)).get_attr("value"), Some("fixed"));
    }

    #[test]
    fn test_disabled_ignores_input() {
        let cx = cx();
        let field = input().id("d").default_value("a").disabled(true);
        let el = field.build(&cx);
        assert!(!control(&el).dispatch(&Event::input("b")));
        assert_eq!(control(&field.build(&cx)).get_attr("value"), Some("a"));
        assert!(el.has_class("lumen-input--disabled"));
    }

    #[test]
    fn test_focus_highlights_border() {
        let cx = cx();
        let field = input().id("f");
        control(&field.build(&cx)).dispatch(&Event::focus());
        let el = field.build(&cx);
        assert!(el.has_class("lumen-input--focused"));
        assert_eq!(el.style_value("border"), Some("2px solid #1976d2"));
    }

    #[test]
    fn test_variants_and_sizes() {
        let filled = input().variant(FieldVariant::Filled).size(ComponentSize::Small).build(&cx());
        assert!(filled.has_class("lumen-input--filled"));
        assert!(filled.has_class("lumen-input--small"));
        assert!(filled.style_value("border-bottom").is_some());
        assert_eq!(filled.style_value("font-size"), Some("14px"));
    }

    #[test]
    fn test_adornments() {
        let el = input().start_adornment("$").end_adornment("kg").build(&cx());
        assert_eq!(el.child_elements().count(), 3);
        assert_eq!(
            el.find_by_class("lumen-input__start-adornment").unwrap().text_content(),
            "$"
        );
    }

    #[test]
    fn test_error_marks_control_invalid() {
        let el = input().error(true).build(&cx());
        assert_eq!(control(&el).get_attr("aria-invalid"), Some("true"));
        assert_eq!(el.style_value("border"), Some("1px solid #d32f2f"));
    }

    #[test]
    fn test_textarea_rows_and_resize() {
        let el = textarea().rows(6).max_rows(4).resize(Resize::None).build(&cx());
        let area = el.find_by_class("lumen-textarea__input").unwrap();
        assert_eq!(area.tag(), "textarea");
        assert_eq!(area.get_attr("rows"), Some("4"));
        assert_eq!(area.style_value("resize"), Some("none"));
        assert_eq!(area.style_value("max-height"), Some("5.75em"));
    }

    #[test]
    fn test_textarea_uncontrolled_value() {
        let cx = cx();
        let area = textarea().id("notes");
        let el = area.build(&cx);
        el.find_by_class("lumen-textarea__input").unwrap().dispatch(&Event::input("hi"));
        let el = area.build(&cx);
        assert_eq!(el.find_by_class("lumen-textarea__input").unwrap().text_content(), "hi");
    }
}
