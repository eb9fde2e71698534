//! Theme provider
//!
//! Installs a theme scope for its children and wraps them in a root element
//! that carries `data-theme` plus the theme's background and text colors.

use std::sync::Arc;

use lumen_core::{div, Color, Element};
use lumen_theme::css::THEME_ATTRIBUTE;
use lumen_theme::{Theme, ThemeMode, ThemeState};

use crate::context::{build_children, BuildContext, Child, ElementBuilder};

enum ProviderSource {
    State(Arc<ThemeState>),
    Global,
    Fixed(Theme),
}

/// Provides a theme to every descendant built through it
pub struct ThemeProvider {
    source: ProviderSource,
    children: Vec<Child>,
}

impl ThemeProvider {
    /// Provide a live theme state
    pub fn new(state: Arc<ThemeState>) -> Self {
        Self {
            source: ProviderSource::State(state),
            children: Vec::new(),
        }
    }

    /// Provide the process-wide state installed with `ThemeState::init`
    pub fn global() -> Self {
        Self {
            source: ProviderSource::Global,
            children: Vec::new(),
        }
    }

    /// Provide a fixed theme (built-in or mocked)
    pub fn fixed(theme: Theme) -> Self {
        Self {
            source: ProviderSource::Fixed(theme),
            children: Vec::new(),
        }
    }

    /// Provide the built-in theme for a mode
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self::fixed(match mode {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        })
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Context seen by the children
    pub fn scope(&self, cx: &BuildContext) -> BuildContext {
        match &self.source {
            ProviderSource::State(state) => cx.clone().with_theme_state(Arc::clone(state)),
            ProviderSource::Global => cx.clone().with_global_theme(),
            ProviderSource::Fixed(theme) => cx.clone().with_theme(theme.clone()),
        }
    }
}

impl ElementBuilder for ThemeProvider {
    fn build(&self, cx: &BuildContext) -> Element {
        let scoped = self.scope(cx);
        let theme = scoped.theme();
        tracing::trace!("ThemeProvider build in {} mode", theme.mode());

        div()
            .class("lumen-theme-root")
            .attr(THEME_ATTRIBUTE, theme.mode().as_str())
            .bg(theme.color("background.default", Color::WHITE))
            .color(theme.color("text.primary", Color::BLACK))
            .style("font-family", theme.font_family())
            .children(build_children(&self.children, &scoped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::span;

    #[test]
    fn test_children_see_provided_theme() {
        let provider = ThemeProvider::with_mode(ThemeMode::Dark).child(|cx: &BuildContext| {
            span().attr("data-mode", cx.theme().mode().as_str())
        });
        let root = provider.build(&BuildContext::new());
        assert_eq!(root.get_attr("data-theme"), Some("dark"));
        assert_eq!(root.style_value("background-color"), Some("#121212"));
        let inner = root.find_by_attr("data-mode", "dark");
        assert!(inner.is_some());
    }

    #[test]
    fn test_nested_provider_overrides() {
        let provider = ThemeProvider::with_mode(ThemeMode::Light)
            .child(ThemeProvider::with_mode(ThemeMode::Dark));
        let root = provider.build(&BuildContext::new());
        let inner = root.child_elements().next().unwrap();
        assert_eq!(inner.get_attr("data-theme"), Some("dark"));
    }
}
