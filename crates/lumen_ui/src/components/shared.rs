//! Shared prop types and theme lookups
//!
//! Every lookup here goes through the active theme with the built-in light
//! theme as the fallback source, so components render sensibly against
//! partial or mocked themes.
//!
//! The field variant/size mapping used by `Input`, `Textarea`, `Select` and
//! `Checkbox` lives here once instead of in each component.

use std::sync::OnceLock;

use lumen_core::{el, px, Color, Element, Style};
use lumen_theme::{resolve, Palette, SpacingToken, TextVariant, Theme};

/// Class name for a component root (`lumen-button`)
pub(crate) fn class(component: &str) -> String {
    format!("lumen-{component}")
}

/// Modifier class (`lumen-button--contained`)
pub(crate) fn modifier(component: &str, name: &str) -> String {
    format!("lumen-{component}--{name}")
}

/// Part class (`lumen-tabs__indicator`)
pub(crate) fn part(component: &str, name: &str) -> String {
    format!("lumen-{component}__{name}")
}

/// Inline SVG icon on a 24x24 view box, filled with the current color
pub(crate) fn svg_icon(path: &str, size: f32) -> Element {
    el("svg")
        .attr("viewBox", "0 0 24 24")
        .attr("width", size.to_string())
        .attr("height", size.to_string())
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .attr("focusable", "false")
        .child(el("path").attr("d", path))
}

// ========== Theme Lookups ==========

fn default_theme() -> &'static Theme {
    static DEFAULT: OnceLock<Theme> = OnceLock::new();
    DEFAULT.get_or_init(Theme::light)
}

/// Color under `colors`, e.g. `"primary.main"`
pub(crate) fn color(theme: &Theme, path: &str) -> Color {
    theme.color(path, default_theme().color(path, Color::TRANSPARENT))
}

pub(crate) fn palette(theme: &Theme, palette: Palette, shade: &str) -> Color {
    theme.palette_color(
        palette,
        shade,
        default_theme().palette_color(palette, shade, Color::TRANSPARENT),
    )
}

pub(crate) fn spacing(theme: &Theme, key: &str) -> f32 {
    theme.spacing(key, default_theme().spacing(key, 0.0))
}

pub(crate) fn radius(theme: &Theme, key: &str) -> f32 {
    theme.radius(key, default_theme().radius(key, 0.0))
}

pub(crate) fn shadow(theme: &Theme, key: &str) -> String {
    theme.shadow(key, &default_theme().shadow(key, "none"))
}

/// Radius key (`"md"`) as px, or the string itself as a raw CSS length
pub(crate) fn radius_css(theme: &Theme, key: &str) -> String {
    if resolve(default_theme().tokens(), ["borderRadius", key]).is_some() {
        px(radius(theme, key))
    } else {
        key.to_string()
    }
}

/// Shadow key (`"sm"`), or the string itself as a raw `box-shadow`
pub(crate) fn shadow_css(theme: &Theme, key: &str) -> String {
    if resolve(default_theme().tokens(), ["shadows", key]).is_some() {
        shadow(theme, key)
    } else {
        key.to_string()
    }
}

pub(crate) fn z_index(theme: &Theme, key: &str) -> i32 {
    theme.z_index(key, default_theme().z_index(key, 0))
}

pub(crate) fn font_size(theme: &Theme, key: &str) -> f32 {
    theme.font_size(key, default_theme().font_size(key, 16.0))
}

pub(crate) fn breakpoint(theme: &Theme, key: &str) -> f32 {
    theme.breakpoint(key, default_theme().breakpoint(key, 0.0))
}

/// Declarations for a typography variant
pub(crate) fn text_style(theme: &Theme, variant: TextVariant) -> Style {
    let text = theme.text_style(variant);
    let mut style = Style::new()
        .set("font-family", theme.font_family())
        .set("font-size", px(text.font_size))
        .set("font-weight", text.font_weight.to_string())
        .set("line-height", text.line_height.to_string())
        .set("letter-spacing", text.letter_spacing);
    if matches!(variant, TextVariant::Overline | TextVariant::Button) {
        style.insert("text-transform", "uppercase");
    }
    style
}

// ========== Spacing ==========

/// A spacing prop: a theme key or a raw px length
#[derive(Clone, Debug, PartialEq)]
pub enum Spacing {
    Token(SpacingToken),
    Key(String),
    Px(f32),
}

impl Spacing {
    pub fn resolve(&self, theme: &Theme) -> f32 {
        match self {
            Spacing::Token(token) => spacing(theme, token.key()),
            Spacing::Key(key) => spacing(theme, key),
            Spacing::Px(value) => *value,
        }
    }

    pub(crate) fn css(&self, theme: &Theme) -> String {
        px(self.resolve(theme))
    }
}

impl From<SpacingToken> for Spacing {
    fn from(token: SpacingToken) -> Self {
        Spacing::Token(token)
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Spacing::Px(value)
    }
}

impl From<i32> for Spacing {
    fn from(value: i32) -> Self {
        Spacing::Px(value as f32)
    }
}

impl From<&str> for Spacing {
    fn from(key: &str) -> Self {
        match SpacingToken::from_key(key) {
            Some(token) => Spacing::Token(token),
            None => Spacing::Key(key.to_string()),
        }
    }
}

// ========== Colors ==========

/// A color prop: a theme path under `colors` or a literal color
#[derive(Clone, Debug, PartialEq)]
pub enum ColorProp {
    Token(String),
    Literal(Color),
}

impl ColorProp {
    /// Theme path first, then the string as a CSS color
    pub fn resolve(&self, theme: &Theme) -> Color {
        match self {
            ColorProp::Literal(color) => *color,
            ColorProp::Token(path) => {
                let literal = Color::parse(path).ok();
                theme.color(
                    path.as_str(),
                    literal.unwrap_or_else(|| default_theme().color(path.as_str(), Color::TRANSPARENT)),
                )
            }
        }
    }
}

impl From<&str> for ColorProp {
    fn from(path: &str) -> Self {
        ColorProp::Token(path.to_string())
    }
}

impl From<String> for ColorProp {
    fn from(path: String) -> Self {
        ColorProp::Token(path)
    }
}

impl From<Color> for ColorProp {
    fn from(color: Color) -> Self {
        ColorProp::Literal(color)
    }
}

// ========== Sizes And Variants ==========

/// Size scale shared by buttons, fields and toggles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComponentSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ComponentSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Edge length of checkbox/radio boxes in px
    pub(crate) fn control_px(self) -> f32 {
        match self {
            Self::Small => 16.0,
            Self::Medium => 20.0,
            Self::Large => 24.0,
        }
    }

    /// Icon size in px
    pub(crate) fn icon_px(self) -> f32 {
        match self {
            Self::Small => 18.0,
            Self::Medium => 24.0,
            Self::Large => 28.0,
        }
    }
}

/// Visual style of a text field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldVariant {
    #[default]
    Outlined,
    Filled,
    Standard,
}

impl FieldVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Standard => "standard",
        }
    }
}

/// Padding and type size of a field at one size
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FieldMetrics {
    pub padding_y: f32,
    pub padding_x: f32,
    pub font_size: f32,
}

impl FieldMetrics {
    pub(crate) fn for_size(size: ComponentSize) -> Self {
        match size {
            ComponentSize::Small => Self {
                padding_y: 8.5,
                padding_x: 12.0,
                font_size: 14.0,
            },
            ComponentSize::Medium => Self {
                padding_y: 16.5,
                padding_x: 14.0,
                font_size: 16.0,
            },
            ComponentSize::Large => Self {
                padding_y: 20.0,
                padding_x: 16.0,
                font_size: 18.0,
            },
        }
    }
}

/// Interaction flags affecting field chrome
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldState {
    pub error: bool,
    pub disabled: bool,
    pub focused: bool,
}

/// Border color of a field: error, then focus, then rest
pub(crate) fn field_border_color(theme: &Theme, state: FieldState) -> Color {
    if state.error {
        palette(theme, Palette::Error, "main")
    } else if state.focused {
        palette(theme, Palette::Primary, "main")
    } else if theme.mode().is_dark() {
        Color::rgba(1.0, 1.0, 1.0, 0.23)
    } else {
        Color::rgba(0.0, 0.0, 0.0, 0.23)
    }
}

/// Chrome for the field container of a text-like control
pub(crate) fn field_style(
    theme: &Theme,
    variant: FieldVariant,
    size: ComponentSize,
    state: FieldState,
) -> Style {
    let metrics = FieldMetrics::for_size(size);
    let border = field_border_color(theme, state);
    let border_width = if state.focused { 2.0 } else { 1.0 };
    let radius = radius(theme, "md");

    let mut style = Style::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("box-sizing", "border-box")
        .set("font-family", theme.font_family())
        .set("font-size", px(metrics.font_size))
        .set(
            "color",
            color(theme, if state.disabled { "text.disabled" } else { "text.primary" }).to_css(),
        );

    match variant {
        FieldVariant::Outlined => {
            style.insert("padding", format!("{} {}", px(metrics.padding_y), px(metrics.padding_x)));
            style.insert("border", format!("{} solid {}", px(border_width), border.to_css()));
            style.insert("border-radius", px(radius));
            style.insert("background-color", "transparent");
        }
        FieldVariant::Filled => {
            let fill = if theme.mode().is_dark() {
                Color::rgba(1.0, 1.0, 1.0, 0.09)
            } else {
                Color::rgba(0.0, 0.0, 0.0, 0.06)
            };
            style.insert(
                "padding",
                format!(
                    "{} {} {}",
                    px(metrics.padding_y + 8.0),
                    px(metrics.padding_x),
                    px((metrics.padding_y - 8.0).max(0.0))
                ),
            );
            style.insert("border-bottom", format!("{} solid {}", px(border_width), border.to_css()));
            style.insert("border-radius", format!("{} {} 0 0", px(radius), px(radius)));
            style.insert("background-color", fill.to_css());
        }
        FieldVariant::Standard => {
            style.insert("padding", format!("{} 0", px(metrics.padding_y / 2.0)));
            style.insert("border-bottom", format!("{} solid {}", px(border_width), border.to_css()));
            style.insert("background-color", "transparent");
        }
    }

    if state.disabled {
        style.insert("cursor", "not-allowed");
        style.insert("opacity", "0.6");
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::ThemeMode;
    use serde_json::json;

    #[test]
    fn test_spacing_from_key() {
        let theme = Theme::light();
        assert_eq!(Spacing::from("md").resolve(&theme), 16.0);
        assert_eq!(Spacing::from(3).resolve(&theme), 3.0);
        assert_eq!(Spacing::from("gutter").resolve(&theme), 0.0);
    }

    #[test]
    fn test_mock_theme_falls_back_to_builtin() {
        let mock = Theme::from_json(ThemeMode::Light, json!({ "colors": { "primary": { "main": "#000000" } } }));
        assert_eq!(palette(&mock, Palette::Primary, "main"), Color::BLACK);
        assert_eq!(palette(&mock, Palette::Primary, "dark"), Color::from_hex(0x1565C0));
        assert_eq!(spacing(&mock, "sm"), 8.0);
    }

    #[test]
    fn test_color_prop_literal_string() {
        let theme = Theme::light();
        assert_eq!(ColorProp::from("#ff0000").resolve(&theme), Color::from_hex(0xFF0000));
        assert_eq!(ColorProp::from("divider").resolve(&theme), Color::rgba(0.0, 0.0, 0.0, 0.12));
    }

    #[test]
    fn test_field_variants_differ() {
        let theme = Theme::light();
        let outlined = field_style(&theme, FieldVariant::Outlined, ComponentSize::Medium, FieldState::default());
        let standard = field_style(&theme, FieldVariant::Standard, ComponentSize::Medium, FieldState::default());
        assert!(outlined.get("border").is_some());
        assert!(standard.get("border").is_none());
        assert!(standard.get("border-bottom").is_some());
    }

    #[test]
    fn test_error_border_wins_over_focus() {
        let theme = Theme::light();
        let state = FieldState {
            error: true,
            focused: true,
            ..Default::default()
        };
        assert_eq!(field_border_color(&theme, state), Color::from_hex(0xD32F2F));
    }
}
