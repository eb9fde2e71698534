//! Build context and the builder trait every component implements
//!
//! A [`BuildContext`] is passed down explicitly while an element tree is
//! built. It carries the theme scope installed by the nearest
//! [`ThemeProvider`](crate::ThemeProvider) and the keyed hook store that holds
//! component-local state across rebuilds.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use lumen_core::{Element, HookState, Node, State};
use lumen_theme::{Theme, ThemeState};

/// Anything that can build an element in a context
pub trait ElementBuilder: Send + Sync {
    fn build(&self, cx: &BuildContext) -> Element;
}

impl ElementBuilder for Element {
    fn build(&self, _cx: &BuildContext) -> Element {
        self.clone()
    }
}

impl<F> ElementBuilder for F
where
    F: Fn(&BuildContext) -> Element + Send + Sync,
{
    fn build(&self, cx: &BuildContext) -> Element {
        self(cx)
    }
}

/// A child slot: plain text or a deferred builder
#[derive(Clone)]
pub enum Child {
    Text(String),
    Builder(Arc<dyn ElementBuilder>),
}

impl Child {
    pub fn build(&self, cx: &BuildContext) -> Node {
        match self {
            Child::Text(text) => Node::Text(text.clone()),
            Child::Builder(builder) => Node::Element(builder.build(cx)),
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl<B: ElementBuilder + 'static> From<B> for Child {
    fn from(builder: B) -> Self {
        Child::Builder(Arc::new(builder))
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Child::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}

/// Build every child in order
pub(crate) fn build_children(children: &[Child], cx: &BuildContext) -> Vec<Node> {
    children.iter().map(|child| child.build(cx)).collect()
}

/// Where the active theme comes from
#[derive(Clone)]
enum ThemeScope {
    /// Live state; the theme follows mode changes
    State(Arc<ThemeState>),
    /// The process-wide state installed with `ThemeState::init`
    Global(&'static ThemeState),
    /// A fixed (possibly mocked) theme
    Fixed(Arc<Theme>),
}

/// Context threaded through every build
#[derive(Clone)]
pub struct BuildContext {
    theme: Option<ThemeScope>,
    hooks: Arc<HookState>,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildContext {
    /// Context with no theme and a fresh hook store
    pub fn new() -> Self {
        Self {
            theme: None,
            hooks: Arc::new(HookState::new()),
        }
    }

    /// Share an existing hook store, so component state survives rebuilds
    pub fn with_hooks(mut self, hooks: Arc<HookState>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Scope a fixed theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(ThemeScope::Fixed(Arc::new(theme)));
        self
    }

    /// Scope a live theme state
    pub fn with_theme_state(mut self, state: Arc<ThemeState>) -> Self {
        self.theme = Some(ThemeScope::State(state));
        self
    }

    /// Scope the global theme state, if one is installed
    pub fn with_global_theme(mut self) -> Self {
        if let Some(state) = ThemeState::try_get() {
            self.theme = Some(ThemeScope::Global(state));
        }
        self
    }

    pub fn hooks(&self) -> &Arc<HookState> {
        &self.hooks
    }

    /// Active theme.
    ///
    /// # Panics
    ///
    /// Panics when no theme provider encloses this build.
    pub fn theme(&self) -> Arc<Theme> {
        self.try_theme()
            .expect("use_theme must be used within a ThemeProvider")
    }

    /// Active theme, or `None` outside any provider
    pub fn try_theme(&self) -> Option<Arc<Theme>> {
        match self.theme.as_ref()? {
            ThemeScope::State(state) => Some(state.theme()),
            ThemeScope::Global(state) => Some(state.theme()),
            ThemeScope::Fixed(theme) => Some(Arc::clone(theme)),
        }
    }

    /// The live theme state behind this scope, when there is one
    pub fn theme_state(&self) -> Option<ThemeStateHandle> {
        match self.theme.as_ref()? {
            ThemeScope::State(state) => Some(ThemeStateHandle::Shared(Arc::clone(state))),
            ThemeScope::Global(state) => Some(ThemeStateHandle::Global(state)),
            ThemeScope::Fixed(_) => None,
        }
    }

    /// Keyed component state, created with `init` on first use
    pub fn use_state_keyed<T, F>(&self, key: &str, init: F) -> State<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.hooks.use_state_keyed(key, init)
    }

    /// The host reports that the page became hidden (window switch, tab
    /// change). A ring that was showing just before comes back on return.
    pub fn visibility_hidden(&self, now: Instant) {
        crate::hooks::use_focus_visible(self).update(|f| f.on_visibility_hidden(now));
    }
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("theme", &self.try_theme().map(|theme| theme.mode()))
            .field("hooks", &self.hooks)
            .finish()
    }
}

/// Owned handle to a theme state that handlers can capture
#[derive(Clone)]
pub enum ThemeStateHandle {
    Shared(Arc<ThemeState>),
    Global(&'static ThemeState),
}

impl std::ops::Deref for ThemeStateHandle {
    type Target = ThemeState;

    fn deref(&self) -> &ThemeState {
        match self {
            ThemeStateHandle::Shared(state) => state,
            ThemeStateHandle::Global(state) => state,
        }
    }
}

/// Active theme of the context.
///
/// # Panics
///
/// Panics outside a [`ThemeProvider`](crate::ThemeProvider).
pub fn use_theme(cx: &BuildContext) -> Arc<Theme> {
    cx.theme()
}
