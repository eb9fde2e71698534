//! Lumen Component Library
//!
//! Themed, presentational components built on the `lumen_core` element tree
//! and the `lumen_theme` token system.
//!
//! # Overview
//!
//! - **Context**: [`BuildContext`] carries the active theme scope and the
//!   keyed hook store through every build
//! - **Provider**: [`ThemeProvider`] scopes a live [`ThemeState`], the global
//!   state or a fixed (possibly mocked) [`Theme`] for its children
//! - **Hooks**: controlled/uncontrolled values and focus-visible tracking
//! - **Components**: layout, typography, inputs, navigation, data display and
//!   feedback builders
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_ui::prelude::*;
//!
//! let page = ThemeProvider::with_mode(ThemeMode::Dark).child(
//!     stack()
//!         .spacing("md")
//!         .child(text_variant(TextVariant::H4, "Settings"))
//!         .child(button("Save").contained().color(Palette::Primary)),
//! );
//!
//! let root = page.build(&BuildContext::new());
//! assert_eq!(root.get_attr("data-theme"), Some("dark"));
//! assert!(root.find_by_class("lumen-button--contained").is_some());
//! ```
//!
//! # State
//!
//! Stateful components (Tabs, Pagination, Breadcrumbs, Image, inputs) keep
//! their uncontrolled state in the context's hook store, keyed by the
//! component id. Rebuild against a context sharing the same store and the
//! state carries over; without an id the state lives only for one build.
//!
//! [`ThemeState`]: lumen_theme::ThemeState
//! [`Theme`]: lumen_theme::Theme

pub mod components;
pub mod context;
pub mod gallery;
pub mod hooks;
pub mod provider;
pub mod render;

pub use context::{use_theme, BuildContext, Child, ElementBuilder, ThemeStateHandle};
pub use hooks::{use_controlled, use_focus_visible, Controlled, FocusVisible, FOCUS_VISIBLE_TIMEOUT};
pub use provider::ThemeProvider;
pub use render::{render_page, render_page_with};

/// Everything needed to build component trees
pub mod prelude {
    pub use crate::components::*;
    pub use crate::context::{use_theme, BuildContext, Child, ElementBuilder};
    pub use crate::gallery::{gallery, Gallery};
    pub use crate::hooks::{
        use_controlled, use_focus_visible, Controlled, FocusVisible, FOCUS_VISIBLE_TIMEOUT,
    };
    pub use crate::provider::ThemeProvider;
    pub use crate::render::render_page;

    pub use lumen_core::{Color, Element, Event, KeyCode, Modifiers, Rect};
    pub use lumen_theme::{Breakpoint, Palette, TextVariant, Theme, ThemeMode, ThemeState};
}
