//! Inline style declarations
//!
//! A [`Style`] is an ordered set of CSS declarations. Later writes to the same
//! property replace the earlier value but keep its original position, so the
//! serialized output is stable across rebuilds.

use std::fmt;

use indexmap::IndexMap;

/// Ordered CSS declarations
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    declarations: IndexMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::insert`]
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a declaration, replacing any previous value for the property
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.declarations.shift_remove(property)
    }

    /// Apply every declaration of `other` on top of this style
    pub fn merge(&mut self, other: &Style) {
        for (property, value) in &other.declarations {
            self.declarations.insert(property.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Format a pixel length
pub fn px(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", (value * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let style = Style::new()
            .set("display", "flex")
            .set("color", "red")
            .set("display", "grid");
        assert_eq!(style.to_css(), "display: grid; color: red");
    }

    #[test]
    fn test_merge() {
        let mut base = Style::new().set("padding", "8px");
        base.merge(&Style::new().set("padding", "16px").set("margin", "0"));
        assert_eq!(base.get("padding"), Some("16px"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_px() {
        assert_eq!(px(0.0), "0");
        assert_eq!(px(16.0), "16px");
        assert_eq!(px(1.5), "1.5px");
    }
}
