//! Lumen Core
//!
//! Foundational primitives shared by the Lumen theme engine and component
//! library:
//!
//! - **Colors**: RGBA colors with CSS parsing and serialization
//! - **Geometry**: Points, sizes and rects reported by a host after layout
//! - **Events**: Synthetic UI events dispatched into element trees
//! - **Elements**: A retained element tree with inline styles, attributes and
//!   handlers, serializable to HTML markup
//! - **State**: Shared reactive cells and keyed hook storage that survive
//!   rebuilds
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{div, text, Color};
//!
//! let card = div()
//!     .class("card")
//!     .bg(Color::from_hex(0x1976D2))
//!     .child(text("Hello"));
//!
//! assert_eq!(
//!     card.to_html(),
//!     r#"<div class="card" style="background-color: #1976d2">Hello</div>"#
//! );
//! ```

pub mod color;
pub mod document;
pub mod element;
pub mod events;
pub mod geometry;
pub mod html;
pub mod state;
pub mod style;

pub use color::{Color, ColorParseError};
pub use document::{AttributeSink, Document};
pub use element::{div, el, span, text, Element, EventHandler, Node};
pub use events::{event_types, Event, EventData, EventType, KeyCode, Modifiers};
pub use geometry::{Point, Rect, Size};
pub use state::{HookState, State};
pub use style::{px, Style};
