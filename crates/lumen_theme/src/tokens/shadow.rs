//! Shadow tokens for theming

use lumen_core::{px, Color};
use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    None,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ShadowToken {
    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// One box shadow layer
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// Black shadow at the given opacity
    pub const fn black(offset_y: f32, blur: f32, alpha: f32) -> Self {
        Self::new(0.0, offset_y, blur, 0.0, Color::rgba(0.0, 0.0, 0.0, alpha))
    }

    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {} {}",
            px(self.offset_x),
            px(self.offset_y),
            px(self.blur),
            px(self.spread),
            self.color.to_css()
        )
    }
}

/// Render stacked layers as a `box-shadow` value
pub fn layers_to_css(layers: &[Shadow]) -> String {
    if layers.is_empty() {
        return "none".to_string();
    }
    layers
        .iter()
        .map(Shadow::to_css)
        .collect::<Vec<_>>()
        .join(", ")
}

fn serialize_layers<S: Serializer>(layers: &[Shadow], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&layers_to_css(layers))
}

/// Elevation shadows, each a stack of layers
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowTokens {
    #[serde(serialize_with = "serialize_layers")]
    pub none: Vec<Shadow>,
    #[serde(serialize_with = "serialize_layers")]
    pub sm: Vec<Shadow>,
    #[serde(serialize_with = "serialize_layers")]
    pub md: Vec<Shadow>,
    #[serde(serialize_with = "serialize_layers")]
    pub lg: Vec<Shadow>,
    #[serde(serialize_with = "serialize_layers")]
    pub xl: Vec<Shadow>,
}

impl ShadowTokens {
    pub fn get(&self, token: ShadowToken) -> &[Shadow] {
        match token {
            ShadowToken::None => &self.none,
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Xl => &self.xl,
        }
    }

    /// Shadows tuned for light surfaces
    pub fn light() -> Self {
        Self {
            none: Vec::new(),
            sm: vec![Shadow::black(1.0, 3.0, 0.12), Shadow::black(1.0, 2.0, 0.24)],
            md: vec![Shadow::black(3.0, 6.0, 0.15), Shadow::black(2.0, 4.0, 0.12)],
            lg: vec![Shadow::black(10.0, 20.0, 0.15), Shadow::black(3.0, 6.0, 0.10)],
            xl: vec![Shadow::black(15.0, 25.0, 0.15), Shadow::black(5.0, 10.0, 0.05)],
        }
    }

    /// Shadows tuned for dark surfaces
    pub fn dark() -> Self {
        Self {
            none: Vec::new(),
            sm: vec![Shadow::black(1.0, 3.0, 0.4), Shadow::black(1.0, 2.0, 0.5)],
            md: vec![Shadow::black(3.0, 6.0, 0.45), Shadow::black(2.0, 4.0, 0.4)],
            lg: vec![Shadow::black(10.0, 20.0, 0.5), Shadow::black(3.0, 6.0, 0.4)],
            xl: vec![Shadow::black(15.0, 25.0, 0.55), Shadow::black(5.0, 10.0, 0.4)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_css() {
        assert_eq!(layers_to_css(&[]), "none");
        assert_eq!(
            layers_to_css(&[Shadow::black(1.0, 3.0, 0.12)]),
            "0 1px 3px 0 rgba(0, 0, 0, 0.12)"
        );
    }
}
