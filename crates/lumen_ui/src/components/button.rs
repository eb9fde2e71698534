//! Button components
//!
//! A themed button with contained, outlined and text variants, any palette
//! color, three sizes, a loading state and icon slots.
//!
//! # Example
//!
//! ```rust
//! use lumen_ui::prelude::*;
//!
//! let cx = BuildContext::new().with_theme(Theme::light());
//!
//! let save = button("Save")
//!     .variant(ButtonVariant::Contained)
//!     .color(Palette::Success)
//!     .on_click(|_| println!("saved"));
//! let el = save.build(&cx);
//! assert!(el.has_class("lumen-button--contained"));
//!
//! // Loading buttons are disabled and show a spinner
//! let busy = button("Saving").loading(true).build(&cx);
//! assert_eq!(busy.get_attr("aria-busy"), Some("true"));
//! ```

use std::sync::Arc;
use std::time::Instant;

use lumen_core::{el, event_types, px, Color, Element, Event, State, Style};
use lumen_theme::{Palette, TextVariant, Theme};

use super::progress::spinner;
use super::shared::{self, class, modifier, part, ComponentSize};
use crate::context::{build_children, BuildContext, Child, ElementBuilder};
use crate::hooks::{use_focus_visible, FocusVisible};

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid fill with elevation
    Contained,
    /// Transparent with a border
    Outlined,
    /// Text only
    #[default]
    Text,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contained => "contained",
            Self::Outlined => "outlined",
            Self::Text => "text",
        }
    }
}

/// Padding and type size per button size
fn size_metrics(size: ComponentSize, variant: ButtonVariant) -> (f32, f32, f32) {
    let (py, px, font) = match size {
        ComponentSize::Small => (4.0, 10.0, 13.0),
        ComponentSize::Medium => (6.0, 16.0, 14.0),
        ComponentSize::Large => (8.0, 22.0, 15.0),
    };
    match variant {
        // The border takes a pixel on every side
        ButtonVariant::Outlined => (py - 1.0, px - 1.0, font),
        ButtonVariant::Text => (py, (px / 2.0).max(5.0), font),
        ButtonVariant::Contained => (py, px, font),
    }
}

pub(crate) type ClickHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Focus-visible key of an interactive element. Elements without an id are
/// not tracked across rebuilds, so they never show a ring.
pub(crate) fn focus_target(component: &str, id: Option<&str>) -> Option<String> {
    id.map(|id| format!("{component}:{id}"))
}

/// Attach the handlers that feed the shared [`FocusVisible`] tracker
pub(crate) fn track_focus(
    element: Element,
    focus: &State<FocusVisible>,
    target: Option<String>,
) -> Element {
    let on_key = focus.clone();
    let on_pointer = focus.clone();
    let element = element
        .on(event_types::KEY_DOWN, move |event| {
            if let Some((_, modifiers)) = event.key() {
                on_key.update(|f| f.on_key_down(modifiers));
            }
        })
        .on(event_types::POINTER_DOWN, move |_| {
            on_pointer.update(FocusVisible::on_pointer_down)
        });
    let Some(target) = target else {
        return element;
    };

    let on_focus = focus.clone();
    let on_blur = focus.clone();
    let blurred = target.clone();
    element
        .on(event_types::FOCUS, move |_| {
            on_focus.update(|f| f.on_focus(&target, false));
        })
        .on(event_types::BLUR, move |_| {
            on_blur.update(|f| f.on_blur(&blurred, Instant::now()));
        })
}

/// Outline shown while focus is keyboard-visible
pub(crate) fn focus_ring(theme: &Theme, palette: Palette) -> String {
    format!(
        "0 0 0 3px {}",
        shared::palette(theme, palette, "main").with_alpha(0.4).to_css()
    )
}

// ========== Button ==========

/// Themed button
#[derive(Clone)]
pub struct Button {
    id: Option<String>,
    children: Vec<Child>,
    variant: ButtonVariant,
    color: Palette,
    size: ComponentSize,
    full_width: bool,
    disabled: bool,
    loading: bool,
    start_icon: Option<Child>,
    end_icon: Option<Child>,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(label: impl Into<Child>) -> Self {
        Self {
            id: None,
            children: vec![label.into()],
            variant: ButtonVariant::default(),
            color: Palette::Primary,
            size: ComponentSize::default(),
            full_width: false,
            disabled: false,
            loading: false,
            start_icon: None,
            end_icon: None,
            on_click: None,
        }
    }

    /// Element id; also keys the focus-visible state across rebuilds
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn contained(self) -> Self {
        self.variant(ButtonVariant::Contained)
    }

    pub fn outlined(self) -> Self {
        self.variant(ButtonVariant::Outlined)
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show a spinner and block clicks
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn start_icon(mut self, icon: impl Into<Child>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn end_icon(mut self, icon: impl Into<Child>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    fn colors(&self, theme: &Theme) -> (Color, Color, Option<Color>) {
        let main = shared::palette(theme, self.color, "main");
        if self.is_inert() {
            let disabled_text = shared::color(theme, "text.disabled");
            return match self.variant {
                ButtonVariant::Contained => (
                    disabled_text.with_alpha(0.12),
                    disabled_text,
                    None,
                ),
                ButtonVariant::Outlined => (Color::TRANSPARENT, disabled_text, Some(disabled_text.with_alpha(0.12))),
                ButtonVariant::Text => (Color::TRANSPARENT, disabled_text, None),
            };
        }
        match self.variant {
            ButtonVariant::Contained => (
                main,
                shared::palette(theme, self.color, "contrastText"),
                None,
            ),
            ButtonVariant::Outlined => (Color::TRANSPARENT, main, Some(main.with_alpha(0.5))),
            ButtonVariant::Text => (Color::TRANSPARENT, main, None),
        }
    }

    fn button_style(&self, theme: &Theme, focus_visible: bool) -> Style {
        let (py, px_x, font) = size_metrics(self.size, self.variant);
        let (bg, fg, border) = self.colors(theme);

        let mut style = shared::text_style(theme, TextVariant::Button);
        style.insert("display", if self.full_width { "flex" } else { "inline-flex" });
        style.insert("align-items", "center");
        style.insert("justify-content", "center");
        style.insert("gap", px(shared::spacing(theme, "sm")));
        style.insert("box-sizing", "border-box");
        style.insert("padding", format!("{} {}", px(py), px(px_x)));
        style.insert("font-size", px(font));
        style.insert("border-radius", px(shared::radius(theme, "md")));
        style.insert("background-color", bg.to_css());
        style.insert("color", fg.to_css());
        style.insert(
            "border",
            match border {
                Some(border) => format!("1px solid {}", border.to_css()),
                None => "none".to_string(),
            },
        );
        if self.variant == ButtonVariant::Contained && !self.is_inert() {
            style.insert("box-shadow", shared::shadow(theme, "sm"));
        }
        if self.full_width {
            style.insert("width", "100%");
        }
        style.insert("cursor", if self.is_inert() { "default" } else { "pointer" });
        if self.is_inert() {
            style.insert("pointer-events", "none");
        }
        if focus_visible {
            style.insert("outline", "none");
            style.insert("box-shadow", focus_ring(theme, self.color));
        }
        style
    }
}

impl ElementBuilder for Button {
    fn build(&self, cx: &BuildContext) -> Element {
        tracing::trace!("Button::build variant={}", self.variant.as_str());
        let theme = cx.theme();
        let focus = use_focus_visible(cx);
        let target = focus_target("button", self.id.as_deref());
        let focus_visible = target
            .as_deref()
            .is_some_and(|target| focus.with(|f| f.is_visible_on(target)));

        let start = if self.loading {
            Some(
                el("span")
                    .class(part("button", "start-icon"))
                    .style("display", "inherit")
                    .child(spinner().size(16.0).thickness(2.0).inherit_color().build(cx)),
            )
        } else {
            self.start_icon.as_ref().map(|icon| {
                el("span")
                    .class(part("button", "start-icon"))
                    .style("display", "inherit")
                    .child(icon.build(cx))
            })
        };
        let end = self.end_icon.as_ref().map(|icon| {
            el("span")
                .class(part("button", "end-icon"))
                .style("display", "inherit")
                .child(icon.build(cx))
        });

        let mut button = el("button")
            .class(class("button"))
            .class(modifier("button", self.variant.as_str()))
            .class(modifier("button", self.color.key()))
            .class(modifier("button", self.size.as_str()))
            .class_if(modifier("button", "full-width"), self.full_width)
            .class_if(modifier("button", "focus-visible"), focus_visible)
            .attr_opt("id", self.id.clone())
            .attr("type", "button")
            .flag("disabled", self.is_inert())
            .when(self.loading, |e| e.attr("aria-busy", "true"))
            .styles(&self.button_style(&theme, focus_visible))
            .child_opt(start)
            .children(build_children(&self.children, cx))
            .child_opt(end);

        button = track_focus(button, &focus, target);
        if let (Some(handler), false) = (&self.on_click, self.is_inert()) {
            let handler = Arc::clone(handler);
            button = button.on_click(move |event| handler(event));
        }
        button
    }
}

/// Create a button
pub fn button(label: impl Into<Child>) -> Button {
    Button::new(label)
}

// ========== IconButton ==========

/// Round button holding a single icon
#[derive(Clone)]
pub struct IconButton {
    id: Option<String>,
    icon: Child,
    label: String,
    color: Option<Palette>,
    size: ComponentSize,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl IconButton {
    /// `label` becomes the accessible name
    pub fn new(icon: impl Into<Child>, label: impl Into<String>) -> Self {
        Self {
            id: None,
            icon: icon.into(),
            label: label.into(),
            color: None,
            size: ComponentSize::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

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

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }
}

impl ElementBuilder for IconButton {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let focus = use_focus_visible(cx);
        let target = focus_target("icon-button", self.id.as_deref());
        let focus_visible = target
            .as_deref()
            .is_some_and(|target| focus.with(|f| f.is_visible_on(target)));

        let color = if self.disabled {
            shared::color(&theme, "text.disabled")
        } else {
            match self.color {
                Some(palette) => shared::palette(&theme, palette, "main"),
                None => shared::color(&theme, "text.secondary"),
            }
        };
        let padding = match self.size {
            ComponentSize::Small => 5.0,
            ComponentSize::Medium => 8.0,
            ComponentSize::Large => 12.0,
        };

        let mut button = el("button")
            .class(class("icon-button"))
            .class(modifier("icon-button", self.size.as_str()))
            .class_if(modifier("icon-button", "focus-visible"), focus_visible)
            .attr_opt("id", self.id.clone())
            .attr("type", "button")
            .attr("aria-label", self.label.as_str())
            .flag("disabled", self.disabled)
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("padding", px(padding))
            .style("font-size", px(self.size.icon_px()))
            .style("border", "none")
            .style("border-radius", "50%")
            .style("background-color", "transparent")
            .style("color", color.to_css())
            .style("cursor", if self.disabled { "default" } else { "pointer" })
            .when(focus_visible, |e| {
                e.style("box-shadow", focus_ring(&theme, self.color.unwrap_or(Palette::Primary)))
            })
            .child(self.icon.build(cx));

        button = track_focus(button, &focus, target);
        if let (Some(handler), false) = (&self.on_click, self.disabled) {
            let handler = Arc::clone(handler);
            button = button.on_click(move |event| handler(event));
        }
        button
    }
}

pub fn icon_button(icon: impl Into<Child>, label: impl Into<String>) -> IconButton {
    IconButton::new(icon, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{KeyCode, Modifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_contained_uses_palette() {
        let el = button("Go").contained().color(Palette::Error).build(&cx());
        assert_eq!(el.style_value("background-color"), Some("#d32f2f"));
        assert_eq!(el.style_value("color"), Some("#ffffff"));
        assert!(el.has_class("lumen-button--error"));
    }

    #[test]
    fn test_outlined_border() {
        let el = button("Go").outlined().build(&cx());
        assert!(el.style_value("border").unwrap().starts_with("1px solid"));
        assert_eq!(el.style_value("background-color"), Some("transparent"));
    }

    #[test]
    fn test_click_invokes_handler() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let el = button("Go")
            .on_click(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build(&cx());
        assert!(el.dispatch(&Event::click()));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_and_loading_block_clicks() {
        let disabled = button("Go").disabled(true).on_click(|_| panic!("clicked")).build(&cx());
        assert!(!disabled.dispatch(&Event::click()));
        assert_eq!(disabled.get_attr("disabled"), Some(""));

        let loading = button("Go").loading(true).on_click(|_| panic!("clicked")).build(&cx());
        assert!(!loading.dispatch(&Event::click()));
        assert!(loading.find_by_class("lumen-spinner").is_some());
    }

    #[test]
    fn test_icons_surround_label() {
        let el = button("Send").start_icon("<").end_icon(">").build(&cx());
        assert_eq!(el.text_content(), "<Send>");
    }

    #[test]
    fn test_keyboard_focus_shows_ring() {
        let cx = cx();
        let el = button("Go").id("go").build(&cx);
        el.dispatch(&Event::key_down(KeyCode::TAB, Modifiers::NONE));
        el.dispatch(&Event::focus());

        let rebuilt = button("Go").id("go").build(&cx);
        assert!(rebuilt.has_class("lumen-button--focus-visible"));

        rebuilt.dispatch(&Event::pointer_down());
        rebuilt.dispatch(&Event::blur());
        rebuilt.dispatch(&Event::focus());
        assert!(!button("Go").id("go").build(&cx).has_class("lumen-button--focus-visible"));
    }

    #[test]
    fn test_tab_moves_ring_to_next_control() {
        let cx = cx();
        let back = button("Back").id("back").build(&cx);
        back.dispatch(&Event::pointer_down());
        back.dispatch(&Event::focus());
        assert!(!button("Back").id("back").build(&cx).has_class("lumen-button--focus-visible"));

        // Tab lands on the focused control, then focus moves on
        back.dispatch(&Event::key_down(KeyCode::TAB, Modifiers::NONE));
        back.dispatch(&Event::blur());
        button("Go").id("go").build(&cx).dispatch(&Event::focus());

        assert!(button("Go").id("go").build(&cx).has_class("lumen-button--focus-visible"));
        assert!(!button("Back").id("back").build(&cx).has_class("lumen-button--focus-visible"));
    }

    #[test]
    fn test_ring_returns_after_visibility_change() {
        let cx = cx();
        let start = Instant::now();
        let go = button("Go").id("go").build(&cx);
        go.dispatch(&Event::key_down(KeyCode::TAB, Modifiers::NONE));
        go.dispatch(&Event::focus());

        // Window switch: the page hides right after the blur
        use_focus_visible(&cx).update(|f| {
            f.on_pointer_down();
            f.on_blur("button:go", start);
        });
        cx.visibility_hidden(start + Duration::from_millis(20));
        button("Go").id("go").build(&cx).dispatch(&Event::focus());
        assert!(button("Go").id("go").build(&cx).has_class("lumen-button--focus-visible"));
    }

    #[test]
    fn test_detached_button_never_shows_ring() {
        let cx = cx();
        let el = button("Go").build(&cx);
        el.dispatch(&Event::key_down(KeyCode::TAB, Modifiers::NONE));
        el.dispatch(&Event::focus());
        assert!(!button("Go").build(&cx).has_class("lumen-button--focus-visible"));
        assert!(use_focus_visible(&cx).with(FocusVisible::had_keyboard_event));
    }

    #[test]
    fn test_icon_button_label() {
        let el = icon_button("x", "Close").build(&cx());
        assert_eq!(el.get_attr("aria-label"), Some("Close"));
        assert_eq!(el.style_value("border-radius"), Some("50%"));
    }
}
