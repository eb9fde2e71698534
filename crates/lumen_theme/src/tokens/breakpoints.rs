//! Responsive breakpoints

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Minimum viewport widths in px
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl BreakpointTokens {
    pub fn get(&self, breakpoint: Breakpoint) -> f32 {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self {
            xs: 0.0,
            sm: 600.0,
            md: 900.0,
            lg: 1200.0,
            xl: 1536.0,
        }
    }
}
