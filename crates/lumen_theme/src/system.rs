//! Operating system color scheme preference

use crate::mode::ThemeMode;

/// Environment variable that overrides the detected OS preference
pub const COLOR_SCHEME_ENV: &str = "LUMEN_COLOR_SCHEME";

/// Source of the OS-level dark/light preference
pub trait SystemPreference: Send + Sync {
    /// `None` when the platform expresses no preference or cannot be queried
    fn preferred_mode(&self) -> Option<ThemeMode>;
}

/// Never reports a preference
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSystemPreference;

impl SystemPreference for NoSystemPreference {
    fn preferred_mode(&self) -> Option<ThemeMode> {
        None
    }
}

/// Always reports the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedSystemPreference(pub Option<ThemeMode>);

impl SystemPreference for FixedSystemPreference {
    fn preferred_mode(&self) -> Option<ThemeMode> {
        self.0
    }
}

/// Reads `LUMEN_COLOR_SCHEME`, then asks the OS
#[derive(Debug, Default, Clone, Copy)]
pub struct DetectedSystemPreference;

impl SystemPreference for DetectedSystemPreference {
    fn preferred_mode(&self) -> Option<ThemeMode> {
        if let Ok(value) = std::env::var(COLOR_SCHEME_ENV) {
            match value.parse() {
                Ok(mode) => return Some(mode),
                Err(err) => tracing::warn!("ignoring {COLOR_SCHEME_ENV}: {err}"),
            }
        }
        detect_os_color_scheme()
    }
}

#[cfg(feature = "system-theme")]
fn detect_os_color_scheme() -> Option<ThemeMode> {
    match dark_light::detect() {
        dark_light::Mode::Dark => Some(ThemeMode::Dark),
        dark_light::Mode::Light => Some(ThemeMode::Light),
        dark_light::Mode::Default => None,
    }
}

#[cfg(not(feature = "system-theme"))]
fn detect_os_color_scheme() -> Option<ThemeMode> {
    None
}
