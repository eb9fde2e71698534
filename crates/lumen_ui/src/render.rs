//! Page rendering
//!
//! Wraps a component tree in a [`ThemeProvider`] for a live theme state and
//! serializes it as a standalone HTML page. The page's `<html>` attributes
//! come from the [`Document`], which the theme state keeps in sync when it is
//! installed as the state's attribute sink.

use std::sync::Arc;

use lumen_core::{Document, Node};
use lumen_theme::{css, ThemeState};

use crate::context::{BuildContext, Child, ElementBuilder};
use crate::provider::ThemeProvider;

/// Build `content` under `state` and render the full page
pub fn render_page(document: &Document, state: &Arc<ThemeState>, content: impl Into<Child>) -> String {
    render_page_with(document, state, content, &BuildContext::new())
}

/// [`render_page`] with a caller-owned context, so hook state persists
/// across renders
pub fn render_page_with(
    document: &Document,
    state: &Arc<ThemeState>,
    content: impl Into<Child>,
    cx: &BuildContext,
) -> String {
    let root = ThemeProvider::new(Arc::clone(state)).child(content).build(cx);
    tracing::debug!("rendering page in {} mode", state.mode());
    document.render(&Node::Element(root), &css::stylesheet(state.bundle()))
}
