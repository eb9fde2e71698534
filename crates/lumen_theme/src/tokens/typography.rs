//! Typography tokens

use serde::{Deserialize, Serialize};

/// Text style variants
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum TextVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    #[default]
    Body1,
    Body2,
    Caption,
    Overline,
    Button,
}

impl TextVariant {
    pub const ALL: [TextVariant; 13] = [
        TextVariant::H1,
        TextVariant::H2,
        TextVariant::H3,
        TextVariant::H4,
        TextVariant::H5,
        TextVariant::H6,
        TextVariant::Subtitle1,
        TextVariant::Subtitle2,
        TextVariant::Body1,
        TextVariant::Body2,
        TextVariant::Caption,
        TextVariant::Overline,
        TextVariant::Button,
    ];

    /// Key of this variant under `typography`
    pub fn key(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Subtitle1 => "subtitle1",
            Self::Subtitle2 => "subtitle2",
            Self::Body1 => "body1",
            Self::Body2 => "body2",
            Self::Caption => "caption",
            Self::Overline => "overline",
            Self::Button => "button",
        }
    }
}

/// Resolved style of one text variant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// px
    pub font_size: f32,
    pub font_weight: u16,
    /// Unitless multiplier
    pub line_height: f32,
    pub letter_spacing: String,
}

impl TextStyle {
    fn new(font_size: f32, font_weight: u16, line_height: f32, letter_spacing: &str) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
            letter_spacing: letter_spacing.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xxl: f32,
    #[serde(rename = "3xl")]
    pub xxxl: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontWeights {
    pub light: u16,
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyVariants {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
    pub subtitle1: TextStyle,
    pub subtitle2: TextStyle,
    pub body1: TextStyle,
    pub body2: TextStyle,
    pub caption: TextStyle,
    pub overline: TextStyle,
    pub button: TextStyle,
}

impl TypographyVariants {
    pub fn get(&self, variant: TextVariant) -> &TextStyle {
        match variant {
            TextVariant::H1 => &self.h1,
            TextVariant::H2 => &self.h2,
            TextVariant::H3 => &self.h3,
            TextVariant::H4 => &self.h4,
            TextVariant::H5 => &self.h5,
            TextVariant::H6 => &self.h6,
            TextVariant::Subtitle1 => &self.subtitle1,
            TextVariant::Subtitle2 => &self.subtitle2,
            TextVariant::Body1 => &self.body1,
            TextVariant::Body2 => &self.body2,
            TextVariant::Caption => &self.caption,
            TextVariant::Overline => &self.overline,
            TextVariant::Button => &self.button,
        }
    }
}

/// Font families, scales and per-variant text styles.
///
/// Variant entries serialize next to the scales, so `typography.h1.fontSize`
/// and `typography.fontSize.md` are both valid token paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: String,
    pub font_family_mono: String,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
    #[serde(flatten)]
    pub variants: TypographyVariants,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "\"Inter\", \"Roboto\", \"Helvetica\", \"Arial\", sans-serif".to_string(),
            font_family_mono: "\"JetBrains Mono\", \"Fira Code\", monospace".to_string(),
            font_size: FontSizes {
                xs: 12.0,
                sm: 14.0,
                md: 16.0,
                lg: 18.0,
                xl: 20.0,
                xxl: 24.0,
                xxxl: 30.0,
            },
            font_weight: FontWeights {
                light: 300,
                regular: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
            },
            line_height: LineHeights {
                tight: 1.25,
                normal: 1.5,
                relaxed: 1.75,
            },
            variants: TypographyVariants {
                h1: TextStyle::new(96.0, 300, 1.167, "-1.5px"),
                h2: TextStyle::new(60.0, 300, 1.2, "-0.5px"),
                h3: TextStyle::new(48.0, 400, 1.167, "0"),
                h4: TextStyle::new(34.0, 400, 1.235, "0.25px"),
                h5: TextStyle::new(24.0, 400, 1.334, "0"),
                h6: TextStyle::new(20.0, 500, 1.6, "0.15px"),
                subtitle1: TextStyle::new(16.0, 400, 1.75, "0.15px"),
                subtitle2: TextStyle::new(14.0, 500, 1.57, "0.1px"),
                body1: TextStyle::new(16.0, 400, 1.5, "0.15px"),
                body2: TextStyle::new(14.0, 400, 1.43, "0.15px"),
                caption: TextStyle::new(12.0, 400, 1.66, "0.4px"),
                overline: TextStyle::new(12.0, 400, 2.66, "1px"),
                button: TextStyle::new(14.0, 500, 1.75, "0.4px"),
            },
        }
    }
}
