//! Built-in token sets

mod lumen;

pub use lumen::LumenTheme;
