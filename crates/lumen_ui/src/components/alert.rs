//! Alert
//!
//! A short, prominent message with a severity. `standard` tints the
//! background, `filled` uses the solid palette color, `outlined` draws a
//! border.

use std::sync::Arc;

use lumen_core::{el, px, Color, Element};
use lumen_theme::{Palette, TextVariant, Theme};

use super::shared::{self, class, modifier, part, svg_icon};
use crate::context::{BuildContext, Child, ElementBuilder};

const SUCCESS_PATH: &str = "M20,12A8,8 0 0,1 12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4C12.76,4 13.5,4.11 14.2, 4.31L15.77,2.74C14.61,2.26 13.34,2 12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12M7.91,10.08L6.5,11.5L11,16L21,6L19.59,4.58L11,13.17L7.91,10.08Z";
const INFO_PATH: &str = "M11,9H13V7H11M12,20C7.59,20 4,16.41 4,12C4,7.59 7.59,4 12,4C16.41,4 20,7.59 20, 12C20,16.41 16.41,20 12,20M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10, 10 0 0,0 12,2M11,17H13V11H11V17Z";
const WARNING_PATH: &str = "M12 5.99L19.53 19H4.47L12 5.99M12 2L1 21h22L12 2zm1 14h-2v2h2v-2zm0-6h-2v4h2v-4z";
const ERROR_PATH: &str = "M11 15h2v2h-2zm0-8h2v6h-2zm.99-5C6.47 2 2 6.48 2 12s4.47 10 9.99 10C17.52 22 22 17.52 22 12S17.52 2 11.99 2zM12 20c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8z";
const CLOSE_PATH: &str = "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Severity::Success => Palette::Success,
            Severity::Info => Palette::Info,
            Severity::Warning => Palette::Warning,
            Severity::Error => Palette::Error,
        }
    }

    fn icon_path(self) -> &'static str {
        match self {
            Severity::Success => SUCCESS_PATH,
            Severity::Info => INFO_PATH,
            Severity::Warning => WARNING_PATH,
            Severity::Error => ERROR_PATH,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Standard,
    Filled,
    Outlined,
}

impl AlertVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertVariant::Standard => "standard",
            AlertVariant::Filled => "filled",
            AlertVariant::Outlined => "outlined",
        }
    }
}

/// Background, text, border and icon colors for a severity/variant pair
fn alert_colors(theme: &Theme, severity: Severity, variant: AlertVariant) -> (Color, Color, Option<Color>, Color) {
    let main = shared::palette(theme, severity.palette(), "main");
    let (surface, ink) = if theme.mode().is_dark() {
        (Color::BLACK, Color::WHITE)
    } else {
        (Color::WHITE, Color::BLACK)
    };
    let text = Color::lerp(&main, &ink, 0.6);
    match variant {
        AlertVariant::Standard => (Color::lerp(&main, &surface, 0.9), text, None, main),
        AlertVariant::Filled => {
            let contrast = shared::palette(theme, severity.palette(), "contrastText");
            (main, contrast, None, contrast)
        }
        AlertVariant::Outlined => (Color::TRANSPARENT, text, Some(main), main),
    }
}

#[derive(Clone)]
pub struct Alert {
    severity: Severity,
    variant: AlertVariant,
    title: Option<String>,
    message: Vec<Child>,
    show_icon: bool,
    icon: Option<Child>,
    action: Option<Child>,
    on_close: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Alert {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            variant: AlertVariant::default(),
            title: None,
            message: Vec::new(),
            show_icon: true,
            icon: None,
            action: None,
            on_close: None,
        }
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn filled(self) -> Self {
        self.variant(AlertVariant::Filled)
    }

    pub fn outlined(self) -> Self {
        self.variant(AlertVariant::Outlined)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.message.push(child.into());
        self
    }

    /// Replace the severity icon
    pub fn icon(mut self, icon: impl Into<Child>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn hide_icon(mut self) -> Self {
        self.show_icon = false;
        self
    }

    /// Trailing slot; takes the place of the close button
    pub fn action(mut self, action: impl Into<Child>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Shows a close button when no action is set
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(handler));
        self
    }
}

impl ElementBuilder for Alert {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let (background, text, border, icon_color) = alert_colors(&theme, self.severity, self.variant);
        let gap = shared::spacing(&theme, "md");

        let icon = self.show_icon.then(|| {
            el("div")
                .class(part("alert", "icon"))
                .style("display", "flex")
                .style("padding", "7px 0")
                .style("margin-right", px(gap * 0.75))
                .style("opacity", "0.9")
                .style("color", icon_color.to_css())
                .child(match &self.icon {
                    Some(icon) => icon.build(cx),
                    None => svg_icon(self.severity.icon_path(), 22.0).into(),
                })
        });

        let message = el("div")
            .class(part("alert", "message"))
            .style("padding", "8px 0")
            .style("min-width", "0")
            .style("overflow", "auto")
            .child_opt(self.title.as_ref().map(|title| {
                el("div")
                    .class(part("alert", "title"))
                    .styles(&shared::text_style(&theme, TextVariant::Body1))
                    .style("font-weight", "500")
                    .style("margin", "-2px 0 4px")
                    .child(title.as_str())
            }))
            .children(self.message.iter().map(|child| child.build(cx)));

        let action = match (&self.action, &self.on_close) {
            (Some(action), _) => Some(action.build(cx)),
            (None, Some(on_close)) => {
                let on_close = Arc::clone(on_close);
                Some(
                    el("button")
                        .class(part("alert", "close"))
                        .attr("type", "button")
                        .attr("aria-label", "Close")
                        .attr("title", "Close")
                        .style("display", "inline-flex")
                        .style("padding", "5px")
                        .style("border", "none")
                        .style("border-radius", "50%")
                        .style("background", "transparent")
                        .style("color", "inherit")
                        .style("cursor", "pointer")
                        .child(svg_icon(CLOSE_PATH, 20.0))
                        .on_click(move |_| on_close())
                        .into(),
                )
            }
            (None, None) => None,
        };

        el("div")
            .class(class("alert"))
            .class(modifier("alert", self.variant.as_str()))
            .class(modifier("alert", self.severity.as_str()))
            .attr("role", "alert")
            .styles(&shared::text_style(&theme, TextVariant::Body2))
            .style("display", "flex")
            .style("padding", format!("6px {}", px(gap)))
            .style("border-radius", px(shared::radius(&theme, "sm")))
            .style("background-color", background.to_css())
            .style("color", text.to_css())
            .when_some(border, |e, border| {
                e.style("border", format!("1px solid {}", border.to_css()))
            })
            .when(self.variant == AlertVariant::Filled, |e| e.style("font-weight", "500"))
            .child_opt(icon)
            .child(message)
            .child_opt(action.map(|action| {
                el("div")
                    .class(part("alert", "action"))
                    .style("display", "flex")
                    .style("align-items", "flex-start")
                    .style("padding", "4px 0 0 16px")
                    .style("margin-left", "auto")
                    .style("margin-right", "-8px")
                    .child(action)
            }))
    }
}

pub fn alert(severity: Severity) -> Alert {
    Alert::new(severity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Event;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_filled_uses_palette_main() {
        let theme = Theme::light();
        let el = alert(Severity::Error).filled().child("Boom").build(&cx());
        let main = theme.palette_color(Palette::Error, "main", Color::BLACK);
        assert_eq!(el.style_value("background-color"), Some(main.to_css().as_str()));
        assert_eq!(el.get_attr("role"), Some("alert"));
        assert!(el.has_class("lumen-alert--error"));
    }

    #[test]
    fn test_outlined_has_border() {
        let el = alert(Severity::Warning).outlined().build(&cx());
        assert!(el.style_value("border").is_some());
        let el = alert(Severity::Warning).build(&cx());
        assert!(el.style_value("border").is_none());
    }

    #[test]
    fn test_close_button() {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = closed.clone();
        let el = alert(Severity::Success)
            .title("Saved")
            .child("All changes stored")
            .on_close(move || flag.store(true, Ordering::SeqCst))
            .build(&cx());
        el.find_by_attr("aria-label", "Close").unwrap().dispatch(&Event::click());
        assert!(closed.load(Ordering::SeqCst));
        assert!(el.text_content().starts_with("SavedAll changes stored"));
    }

    #[test]
    fn test_hidden_icon() {
        let el = alert(Severity::Info).hide_icon().build(&cx());
        assert!(el.find_by_class("lumen-alert__icon").is_none());
    }
}
