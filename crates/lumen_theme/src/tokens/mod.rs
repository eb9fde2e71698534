//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (semantic palettes, grey scale, text, background)
//! - Spacing
//! - Border radii
//! - Shadows
//! - Typography (families, scales, per-variant styles)
//! - Breakpoints
//! - Z-index layers
//!
//! A [`TokenSet`] groups one value for every token. Its serialized form is the
//! token tree components resolve paths against (`colors.primary.main`,
//! `borderRadius.md`, `typography.h1.fontSize`).

mod breakpoints;
mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;
mod z_index;

pub use breakpoints::*;
pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
pub use z_index::*;

use serde::Serialize;

/// Every token for one theme mode
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub border_radius: RadiusTokens,
    pub shadows: ShadowTokens,
    pub typography: TypographyTokens,
    pub breakpoints: BreakpointTokens,
    pub z_index: ZIndexTokens,
}
