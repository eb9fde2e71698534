//! Color tokens for theming

use lumen_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic palettes addressable by components (`color="error"`)
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Palette {
    #[default]
    Primary,
    Secondary,
    Error,
    Success,
    Warning,
    Info,
}

impl Palette {
    pub const ALL: [Palette; 6] = [
        Palette::Primary,
        Palette::Secondary,
        Palette::Error,
        Palette::Success,
        Palette::Warning,
        Palette::Info,
    ];

    /// Key of this palette under `colors`
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Shades of one semantic palette
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub light: Color,
    pub main: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

impl PaletteColor {
    pub fn new(light: u32, main: u32, dark: u32, contrast_text: Color) -> Self {
        Self {
            light: Color::from_hex(light),
            main: Color::from_hex(main),
            dark: Color::from_hex(dark),
            contrast_text,
        }
    }
}

/// Neutral grey scale keyed by weight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreyScale {
    #[serde(rename = "50")]
    pub g50: Color,
    #[serde(rename = "100")]
    pub g100: Color,
    #[serde(rename = "200")]
    pub g200: Color,
    #[serde(rename = "300")]
    pub g300: Color,
    #[serde(rename = "400")]
    pub g400: Color,
    #[serde(rename = "500")]
    pub g500: Color,
    #[serde(rename = "600")]
    pub g600: Color,
    #[serde(rename = "700")]
    pub g700: Color,
    #[serde(rename = "800")]
    pub g800: Color,
    #[serde(rename = "900")]
    pub g900: Color,
}

impl Default for GreyScale {
    fn default() -> Self {
        Self {
            g50: Color::from_hex(0xFAFAFA),
            g100: Color::from_hex(0xF5F5F5),
            g200: Color::from_hex(0xEEEEEE),
            g300: Color::from_hex(0xE0E0E0),
            g400: Color::from_hex(0xBDBDBD),
            g500: Color::from_hex(0x9E9E9E),
            g600: Color::from_hex(0x757575),
            g700: Color::from_hex(0x616161),
            g800: Color::from_hex(0x424242),
            g900: Color::from_hex(0x212121),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommonColors {
    pub black: Color,
    pub white: Color,
}

impl Default for CommonColors {
    fn default() -> Self {
        Self {
            black: Color::BLACK,
            white: Color::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub disabled: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub default: Color,
    pub paper: Color,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub success: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub grey: GreyScale,
    pub common: CommonColors,
    pub text: TextColors,
    pub background: BackgroundColors,
    pub divider: Color,
}

impl ColorTokens {
    pub fn palette(&self, palette: Palette) -> &PaletteColor {
        match palette {
            Palette::Primary => &self.primary,
            Palette::Secondary => &self.secondary,
            Palette::Error => &self.error,
            Palette::Success => &self.success,
            Palette::Warning => &self.warning,
            Palette::Info => &self.info,
        }
    }
}
