//! Token path resolution
//!
//! Components never index a theme directly. They ask for the value at a
//! symbolic path together with a fallback, so a partial or mocked theme still
//! produces output:
//!
//! ```rust
//! use lumen_core::Color;
//! use lumen_theme::{get_theme_value, Theme, ThemeMode};
//! use serde_json::json;
//!
//! let theme = Theme::from_json(ThemeMode::Light, json!({
//!     "colors": { "primary": { "main": "#ff0000" } }
//! }));
//!
//! let main: Color = get_theme_value(&theme, ["colors", "primary", "main"], Color::BLACK);
//! assert_eq!(main, Color::from_hex(0xFF0000));
//!
//! let dark: Color = get_theme_value(&theme, "colors.primary.dark", Color::WHITE);
//! assert_eq!(dark, Color::WHITE);
//! ```

use lumen_core::Color;
use serde_json::Value;
use smallvec::SmallVec;

use crate::theme::Theme;

/// A sequence of keys into the token tree.
///
/// Implemented for key slices and arrays, and for dotted strings
/// (`"colors.grey.500"`).
pub trait TokenPath {
    fn segments(&self) -> SmallVec<[&str; 6]>;
}

impl TokenPath for str {
    fn segments(&self) -> SmallVec<[&str; 6]> {
        self.split('.').collect()
    }
}

impl TokenPath for String {
    fn segments(&self) -> SmallVec<[&str; 6]> {
        self.as_str().segments()
    }
}

impl<S: AsRef<str>> TokenPath for [S] {
    fn segments(&self) -> SmallVec<[&str; 6]> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>, const N: usize> TokenPath for [S; N] {
    fn segments(&self) -> SmallVec<[&str; 6]> {
        self.as_slice().segments()
    }
}

impl<S: AsRef<str>> TokenPath for Vec<S> {
    fn segments(&self) -> SmallVec<[&str; 6]> {
        self.as_slice().segments()
    }
}

impl<T: TokenPath + ?Sized> TokenPath for &T {
    fn segments(&self) -> SmallVec<[&str; 6]> {
        (**self).segments()
    }
}

/// Walk `path` from `tree`.
///
/// Returns `None` when a segment is missing or an intermediate value is not
/// an object.
pub fn resolve<P: TokenPath>(tree: &Value, path: P) -> Option<&Value> {
    let mut node = tree;
    for segment in path.segments() {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// Conversion from a token tree leaf
pub trait FromToken: Sized {
    fn from_token(value: &Value) -> Option<Self>;
}

impl FromToken for Value {
    fn from_token(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromToken for f64 {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromToken for f32 {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_f64().map(|v| v as f32)
    }
}

impl FromToken for i64 {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromToken for i32 {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|v| i32::try_from(v).ok())
    }
}

impl FromToken for u16 {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|v| u16::try_from(v).ok())
    }
}

impl FromToken for u32 {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|v| u32::try_from(v).ok())
    }
}

impl FromToken for bool {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromToken for String {
    fn from_token(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl FromToken for Color {
    fn from_token(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| Color::parse(s).ok())
    }
}

/// Typed value at `path` in `tree`, or `fallback`
pub fn get_value<T: FromToken, P: TokenPath>(tree: &Value, path: P, fallback: T) -> T {
    resolve(tree, path)
        .and_then(T::from_token)
        .unwrap_or(fallback)
}

/// Typed value at `path` in the theme's token tree, or exactly `fallback`.
///
/// Missing segments, non-object intermediates and leaves of the wrong type
/// all produce the fallback.
pub fn get_theme_value<T: FromToken, P: TokenPath>(theme: &Theme, path: P, fallback: T) -> T {
    get_value(theme.tokens(), path, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_stops_at_non_object() {
        let tree = json!({ "a": { "b": 1 } });
        assert_eq!(resolve(&tree, ["a", "b"]), Some(&json!(1)));
        assert_eq!(resolve(&tree, ["a", "b", "c"]), None);
        assert_eq!(resolve(&tree, ["x"]), None);
    }

    #[test]
    fn test_empty_path_is_root() {
        let tree = json!({ "a": 1 });
        let empty: [&str; 0] = [];
        assert_eq!(resolve(&tree, empty), Some(&tree));
    }

    #[test]
    fn test_dotted_and_owned_paths() {
        let tree = json!({ "grey": { "500": "#9e9e9e" } });
        assert!(resolve(&tree, "grey.500").is_some());
        assert!(resolve(&tree, String::from("grey.500")).is_some());
        assert!(resolve(&tree, vec!["grey".to_string(), "500".to_string()]).is_some());
        assert!(resolve(&tree, "grey..500").is_none());
    }

    #[test]
    fn test_wrong_type_falls_back() {
        let tree = json!({ "spacing": { "md": "wide" }, "z": 3000000000u64 });
        assert_eq!(get_value(&tree, "spacing.md", 16.0f32), 16.0);
        assert_eq!(get_value(&tree, "z", 7i32), 7);
        assert_eq!(get_value(&tree, "spacing.md", Color::BLACK), Color::BLACK);
    }

    #[test]
    fn test_string_from_number() {
        let tree = json!({ "n": 4 });
        assert_eq!(get_value(&tree, "n", String::new()), "4");
    }
}
