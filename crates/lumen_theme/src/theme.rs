//! Theme snapshots and light/dark bundles

use std::sync::Arc;

use lumen_core::Color;
use serde_json::{Map, Value};

use crate::mode::ThemeMode;
use crate::resolve::{get_value, resolve, FromToken, TokenPath};
use crate::themes::LumenTheme;
use crate::tokens::{Palette, TextStyle, TextVariant, TokenSet, TypographyTokens};

/// Immutable resolved theme for one mode.
///
/// The tokens are held as a tree so that themes can also be built from
/// arbitrary (partial) JSON documents. Cloning is cheap.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    mode: ThemeMode,
    tokens: Arc<Value>,
}

impl Theme {
    /// Build from a complete token set
    pub fn from_tokens(mode: ThemeMode, tokens: &TokenSet) -> Self {
        let tree = match serde_json::to_value(tokens) {
            Ok(Value::Object(mut map)) => {
                map.insert("mode".to_string(), Value::String(mode.as_str().to_string()));
                Value::Object(map)
            }
            Ok(other) => other,
            Err(err) => {
                tracing::error!("failed to serialize token set: {err}");
                Value::Object(Map::new())
            }
        };
        Self {
            mode,
            tokens: Arc::new(tree),
        }
    }

    /// Build from any JSON document, typically a partial or mocked theme
    pub fn from_json(mode: ThemeMode, tokens: Value) -> Self {
        Self {
            mode,
            tokens: Arc::new(tokens),
        }
    }

    /// Built-in light theme
    pub fn light() -> Self {
        Self::from_tokens(ThemeMode::Light, &LumenTheme::light())
    }

    /// Built-in dark theme
    pub fn dark() -> Self {
        Self::from_tokens(ThemeMode::Dark, &LumenTheme::dark())
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The raw token tree
    pub fn tokens(&self) -> &Value {
        &self.tokens
    }

    /// Typed value at `path`, or `fallback`
    pub fn get<T: FromToken, P: TokenPath>(&self, path: P, fallback: T) -> T {
        get_value(&self.tokens, path, fallback)
    }

    fn scoped<T: FromToken, P: TokenPath>(&self, scope: &str, path: P, fallback: T) -> T {
        self.tokens
            .get(scope)
            .and_then(|group| resolve(group, path))
            .and_then(T::from_token)
            .unwrap_or(fallback)
    }

    // ========== Typed Helpers ==========

    /// Color under `colors` (`"primary.main"`, `"grey.500"`, `"divider"`)
    pub fn color<P: TokenPath>(&self, path: P, fallback: Color) -> Color {
        self.scoped("colors", path, fallback)
    }

    /// One shade (`light`, `main`, `dark`, `contrastText`) of a palette
    pub fn palette_color(&self, palette: Palette, shade: &str, fallback: Color) -> Color {
        self.color([palette.key(), shade], fallback)
    }

    /// Spacing in px
    pub fn spacing(&self, key: &str, fallback: f32) -> f32 {
        self.scoped("spacing", key, fallback)
    }

    /// Border radius in px
    pub fn radius(&self, key: &str, fallback: f32) -> f32 {
        self.scoped("borderRadius", key, fallback)
    }

    /// `box-shadow` value
    pub fn shadow(&self, key: &str, fallback: &str) -> String {
        self.scoped("shadows", key, fallback.to_string())
    }

    /// Font size in px from the `typography.fontSize` scale
    pub fn font_size(&self, key: &str, fallback: f32) -> f32 {
        self.scoped("typography", ["fontSize", key], fallback)
    }

    pub fn font_weight(&self, key: &str, fallback: u16) -> u16 {
        self.scoped("typography", ["fontWeight", key], fallback)
    }

    pub fn font_family(&self) -> String {
        self.scoped(
            "typography",
            "fontFamily",
            TypographyTokens::default().font_family,
        )
    }

    pub fn z_index(&self, key: &str, fallback: i32) -> i32 {
        self.scoped("zIndex", key, fallback)
    }

    /// Breakpoint min-width in px
    pub fn breakpoint(&self, key: &str, fallback: f32) -> f32 {
        self.scoped("breakpoints", key, fallback)
    }

    /// Text style of a typography variant, field by field with built-in
    /// fallbacks
    pub fn text_style(&self, variant: TextVariant) -> TextStyle {
        let base = TypographyTokens::default().variants.get(variant).clone();
        let key = variant.key();
        TextStyle {
            font_size: self.scoped("typography", [key, "fontSize"], base.font_size),
            font_weight: self.scoped("typography", [key, "fontWeight"], base.font_weight),
            line_height: self.scoped("typography", [key, "lineHeight"], base.line_height),
            letter_spacing: self.scoped("typography", [key, "letterSpacing"], base.letter_spacing),
        }
    }
}

/// A pair of light and dark token sets
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: String,
    light: TokenSet,
    dark: TokenSet,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: TokenSet, dark: TokenSet) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self, mode: ThemeMode) -> &TokenSet {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Resolve the theme for a mode
    pub fn for_mode(&self, mode: ThemeMode) -> Theme {
        Theme::from_tokens(mode, self.tokens(mode))
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        LumenTheme::bundle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_carries_mode() {
        let theme = Theme::dark();
        assert_eq!(theme.get("mode", String::new()), "dark");
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_typed_helpers() {
        let theme = Theme::light();
        assert_eq!(theme.spacing("md", 0.0), 16.0);
        assert_eq!(theme.radius("full", 0.0), 9999.0);
        assert_eq!(theme.z_index("tooltip", 0), 1600);
        assert_eq!(theme.breakpoint("md", 0.0), 900.0);
        assert_eq!(theme.font_size("sm", 0.0), 14.0);
        assert_eq!(theme.color("grey.500", Color::WHITE), Color::from_hex(0x9E9E9E));
        assert_eq!(
            theme.palette_color(Palette::Primary, "main", Color::WHITE),
            Color::from_hex(0x1976D2)
        );
        assert_eq!(theme.shadow("none", "x"), "none");
    }

    #[test]
    fn test_text_style_partial_override() {
        let theme = Theme::from_json(
            ThemeMode::Light,
            serde_json::json!({ "typography": { "h1": { "fontSize": 40 } } }),
        );
        let h1 = theme.text_style(TextVariant::H1);
        assert_eq!(h1.font_size, 40.0);
        assert_eq!(h1.font_weight, 300);
    }
}
