//! Light/dark toggle button
//!
//! Flips the mode of the enclosing theme state. Under a fixed theme there is
//! nothing to flip and the button renders disabled.

use std::sync::Arc;

use lumen_core::Element;
use lumen_theme::ThemeMode;

use super::button::IconButton;
use super::shared::{modifier, svg_icon, ComponentSize};
use crate::context::{BuildContext, ElementBuilder};

const SUN_PATH: &str = "M12 7c-2.76 0-5 2.24-5 5s2.24 5 5 5 5-2.24 5-5-2.24-5-5-5zM2 13h2c.55 0 1-.45 1-1s-.45-1-1-1H2c-.55 0-1 .45-1 1s.45 1 1 1zm18 0h2c.55 0 1-.45 1-1s-.45-1-1-1h-2c-.55 0-1 .45-1 1s.45 1 1 1zM11 2v2c0 .55.45 1 1 1s1-.45 1-1V2c0-.55-.45-1-1-1s-1 .45-1 1zm0 18v2c0 .55.45 1 1 1s1-.45 1-1v-2c0-.55-.45-1-1-1s-1 .45-1 1z";
const MOON_PATH: &str = "M12 3c-4.97 0-9 4.03-9 9s4.03 9 9 9 9-4.03 9-9c0-.46-.04-.92-.1-1.36-.98 1.37-2.58 2.26-4.4 2.26-2.98 0-5.4-2.42-5.4-5.4 0-1.81.89-3.42 2.26-4.4-.44-.06-.9-.1-1.36-.1z";

#[derive(Clone, Default)]
pub struct ThemeToggle {
    id: Option<String>,
    size: ComponentSize,
    on_toggle: Option<Arc<dyn Fn(ThemeMode) + Send + Sync>>,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    /// Called with the new mode after each toggle
    pub fn on_toggle<F>(mut self, handler: F) -> Self
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        self.on_toggle = Some(Arc::new(handler));
        self
    }
}

impl ElementBuilder for ThemeToggle {
    fn build(&self, cx: &BuildContext) -> Element {
        let mode = cx.theme().mode();
        let state = cx.theme_state();
        let (path, label) = match mode {
            ThemeMode::Light => (MOON_PATH, "Switch to dark mode"),
            ThemeMode::Dark => (SUN_PATH, "Switch to light mode"),
        };

        let mut button = IconButton::new(svg_icon(path, self.size.icon_px()), label)
            .size(self.size)
            .disabled(state.is_none());
        if let Some(id) = &self.id {
            button = button.id(id.clone());
        }
        if let Some(state) = state {
            let on_toggle = self.on_toggle.clone();
            button = button.on_click(move |_| {
                state.toggle_theme();
                let mode = state.mode();
                if let Some(on_toggle) = &on_toggle {
                    on_toggle(mode);
                }
            });
        } else {
            tracing::debug!("ThemeToggle: fixed theme scope, toggle disabled");
        }

        button
            .build(cx)
            .class(modifier("theme-toggle", mode.as_str()))
            .attr("data-mode", mode.as_str())
    }
}

pub fn theme_toggle() -> ThemeToggle {
    ThemeToggle::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Event;
    use lumen_theme::{Theme, ThemeState};

    #[test]
    fn test_toggle_flips_mode() {
        let state = Arc::new(ThemeState::with_mode(ThemeMode::Light));
        let cx = BuildContext::new().with_theme_state(state.clone());

        let el = theme_toggle().build(&cx);
        assert_eq!(el.get_attr("aria-label"), Some("Switch to dark mode"));
        el.dispatch(&Event::click());
        assert_eq!(state.mode(), ThemeMode::Dark);

        let el = theme_toggle().build(&cx);
        assert_eq!(el.get_attr("data-mode"), Some("dark"));
        el.dispatch(&Event::click());
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_fixed_theme_disables_toggle() {
        let cx = BuildContext::new().with_theme(Theme::dark());
        let el = theme_toggle().build(&cx);
        assert!(!el.dispatch(&Event::click()));
    }
}
