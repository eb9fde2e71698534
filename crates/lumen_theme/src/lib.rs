//! Lumen Theme System
//!
//! Design tokens, light/dark themes and the theme state components read from.
//!
//! # Overview
//!
//! - **Design tokens**: Colors, spacing, radii, shadows, typography,
//!   breakpoints and z-index layers for each mode
//! - **Resolution**: Typed lookups by token path that fall back instead of
//!   failing, so partial and mocked themes still render
//! - **Theme state**: Active mode with toggle/set, persisted preference,
//!   OS preference detection and a mirrored `data-theme` root attribute
//! - **CSS export**: Custom properties for stylesheets outside the component
//!   tree
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_core::{AttributeSink, Color, Document};
//! use lumen_theme::{MemoryStore, ThemeMode, ThemeState};
//! use std::sync::Arc;
//!
//! let document = Arc::new(Document::new());
//! let store = Arc::new(MemoryStore::new());
//! let state = ThemeState::builder()
//!     .store(store.clone())
//!     .attribute_sink(document.clone())
//!     .build();
//!
//! state.toggle_theme();
//! assert_eq!(state.mode(), ThemeMode::Dark);
//! assert_eq!(document.attribute("data-theme").as_deref(), Some("dark"));
//!
//! let primary = state.theme().color("primary.main", Color::BLACK);
//! assert_eq!(primary, Color::from_hex(0x90CAF9));
//! ```

pub mod config;
pub mod css;
pub mod error;
pub mod mode;
pub mod resolve;
pub mod state;
pub mod storage;
pub mod system;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use mode::ThemeMode;
pub use resolve::{get_theme_value, get_value, resolve, FromToken, TokenPath};
pub use state::{resolve_initial_mode, ListenerId, ModeSource, ThemeState, ThemeStateBuilder};
pub use storage::{FileStore, MemoryStore, PreferenceStore, DEFAULT_STORAGE_KEY};
pub use system::{DetectedSystemPreference, FixedSystemPreference, NoSystemPreference, SystemPreference};
pub use theme::{Theme, ThemeBundle};
pub use themes::LumenTheme;
pub use tokens::*;
