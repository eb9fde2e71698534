//! Default Lumen theme
//!
//! Blue primary and purple secondary on white surfaces for light mode; the
//! dark variant lifts every palette to its lighter shades so it stays legible
//! on `#121212`.

use lumen_core::Color;

use crate::mode::ThemeMode;
use crate::theme::ThemeBundle;
use crate::tokens::*;

/// Text drawn on light palette shades in dark mode
const DARK_CONTRAST: Color = Color::rgba(0.0, 0.0, 0.0, 0.87);

pub struct LumenTheme;

impl LumenTheme {
    /// Light mode tokens
    pub fn light() -> TokenSet {
        TokenSet {
            colors: ColorTokens {
                primary: PaletteColor::new(0x42A5F5, 0x1976D2, 0x1565C0, Color::WHITE),
                secondary: PaletteColor::new(0xBA68C8, 0x9C27B0, 0x7B1FA2, Color::WHITE),
                error: PaletteColor::new(0xEF5350, 0xD32F2F, 0xC62828, Color::WHITE),
                success: PaletteColor::new(0x4CAF50, 0x2E7D32, 0x1B5E20, Color::WHITE),
                warning: PaletteColor::new(0xFF9800, 0xED6C02, 0xE65100, Color::WHITE),
                info: PaletteColor::new(0x03A9F4, 0x0288D1, 0x01579B, Color::WHITE),
                grey: GreyScale::default(),
                common: CommonColors::default(),
                text: TextColors {
                    primary: Color::rgba(0.0, 0.0, 0.0, 0.87),
                    secondary: Color::rgba(0.0, 0.0, 0.0, 0.6),
                    disabled: Color::rgba(0.0, 0.0, 0.0, 0.38),
                },
                background: BackgroundColors {
                    default: Color::from_hex(0xFAFAFA),
                    paper: Color::WHITE,
                },
                divider: Color::rgba(0.0, 0.0, 0.0, 0.12),
            },
            spacing: SpacingTokens::default(),
            border_radius: RadiusTokens::default(),
            shadows: ShadowTokens::light(),
            typography: TypographyTokens::default(),
            breakpoints: BreakpointTokens::default(),
            z_index: ZIndexTokens::default(),
        }
    }

    /// Dark mode tokens
    pub fn dark() -> TokenSet {
        TokenSet {
            colors: ColorTokens {
                primary: PaletteColor::new(0xE3F2FD, 0x90CAF9, 0x42A5F5, DARK_CONTRAST),
                secondary: PaletteColor::new(0xF3E5F5, 0xCE93D8, 0xAB47BC, DARK_CONTRAST),
                error: PaletteColor::new(0xE57373, 0xF44336, 0xD32F2F, Color::WHITE),
                success: PaletteColor::new(0x81C784, 0x66BB6A, 0x388E3C, DARK_CONTRAST),
                warning: PaletteColor::new(0xFFB74D, 0xFFA726, 0xF57C00, DARK_CONTRAST),
                info: PaletteColor::new(0x4FC3F7, 0x29B6F6, 0x0288D1, DARK_CONTRAST),
                grey: GreyScale::default(),
                common: CommonColors::default(),
                text: TextColors {
                    primary: Color::WHITE,
                    secondary: Color::rgba(1.0, 1.0, 1.0, 0.7),
                    disabled: Color::rgba(1.0, 1.0, 1.0, 0.5),
                },
                background: BackgroundColors {
                    default: Color::from_hex(0x121212),
                    paper: Color::from_hex(0x1E1E1E),
                },
                divider: Color::rgba(1.0, 1.0, 1.0, 0.12),
            },
            spacing: SpacingTokens::default(),
            border_radius: RadiusTokens::default(),
            shadows: ShadowTokens::dark(),
            typography: TypographyTokens::default(),
            breakpoints: BreakpointTokens::default(),
            z_index: ZIndexTokens::default(),
        }
    }

    pub fn tokens(mode: ThemeMode) -> TokenSet {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Lumen", Self::light(), Self::dark())
    }
}
