//! CSS custom property export
//!
//! Non-component stylesheets consume the active theme through custom
//! properties scoped by the root `data-theme` attribute:
//!
//! ```css
//! :root[data-theme="dark"] {
//!   --lumen-colors-primary-main: #90caf9;
//!   --lumen-spacing-md: 16px;
//! }
//! ```

use std::fmt::Write;

use indexmap::IndexMap;
use lumen_core::px;
use serde_json::Value;

use crate::mode::ThemeMode;
use crate::theme::{Theme, ThemeBundle};

/// Prefix shared by every generated custom property
pub const VAR_PREFIX: &str = "--lumen";

/// Root attribute carrying the active mode
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Token groups whose numbers are px lengths
const LENGTH_GROUPS: &[&str] = &["spacing", "borderRadius", "breakpoints"];

/// Flatten a theme into `--lumen-*` custom properties, in token tree order
pub fn variable_map(theme: &Theme) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    if let Some(root) = theme.tokens().as_object() {
        for (key, value) in root {
            if key == "mode" {
                continue;
            }
            let mut path = vec![key.as_str()];
            flatten(&mut path, value, &mut vars);
        }
    }
    vars
}

fn flatten<'a>(path: &mut Vec<&'a str>, value: &'a Value, out: &mut IndexMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key);
                flatten(path, child, out);
                path.pop();
            }
        }
        Value::String(s) => {
            out.insert(variable_name(path), s.clone());
        }
        Value::Number(n) => {
            let is_length = LENGTH_GROUPS.contains(&path[0]) || path.contains(&"fontSize");
            let rendered = match n.as_f64() {
                Some(v) if is_length => px(v as f32),
                // f32 tokens widen to noisy f64s (1.167 -> 1.1670000553131104)
                Some(v) if n.is_f64() => ((v * 10_000.0).round() / 10_000.0).to_string(),
                _ => n.to_string(),
            };
            out.insert(variable_name(path), rendered);
        }
        Value::Bool(b) => {
            out.insert(variable_name(path), b.to_string());
        }
        Value::Null | Value::Array(_) => {}
    }
}

/// `["colors", "primary", "contrastText"]` -> `--lumen-colors-primary-contrast-text`
pub fn variable_name(path: &[&str]) -> String {
    let mut name = String::from(VAR_PREFIX);
    for segment in path {
        name.push('-');
        for c in segment.chars() {
            if c.is_ascii_uppercase() {
                name.push('-');
                name.push(c.to_ascii_lowercase());
            } else {
                name.push(c);
            }
        }
    }
    name
}

/// One `:root[data-theme="<mode>"]` block
pub fn theme_block(theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        ":root[{THEME_ATTRIBUTE}=\"{}\"] {{",
        theme.mode().as_str()
    );
    for (name, value) in variable_map(theme) {
        let _ = writeln!(out, "  {name}: {value};");
    }
    out.push_str("}\n");
    out
}

/// Stylesheet with a block for every mode of the bundle
pub fn stylesheet(bundle: &ThemeBundle) -> String {
    ThemeMode::ALL
        .iter()
        .map(|mode| theme_block(&bundle.for_mode(*mode)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_name_kebab_case() {
        assert_eq!(
            variable_name(&["colors", "primary", "contrastText"]),
            "--lumen-colors-primary-contrast-text"
        );
        assert_eq!(variable_name(&["zIndex", "appBar"]), "--lumen-z-index-app-bar");
    }

    #[test]
    fn test_units() {
        let vars = variable_map(&Theme::light());
        assert_eq!(vars["--lumen-spacing-md"], "16px");
        assert_eq!(vars["--lumen-typography-h1-font-size"], "96px");
        assert_eq!(vars["--lumen-typography-h1-font-weight"], "300");
        assert_eq!(vars["--lumen-typography-font-size-md"], "16px");
        assert_eq!(vars["--lumen-typography-h1-line-height"], "1.167");
        assert_eq!(vars["--lumen-z-index-modal"], "1400");
        assert_eq!(vars["--lumen-colors-primary-main"], "#1976d2");
        assert!(!vars.contains_key("--lumen-mode"));
    }

    #[test]
    fn test_stylesheet_has_both_modes() {
        let css = stylesheet(&ThemeBundle::default());
        assert!(css.contains(":root[data-theme=\"light\"] {"));
        assert!(css.contains(":root[data-theme=\"dark\"] {"));
        assert!(css.contains("--lumen-colors-primary-main: #90caf9;"));
    }
}
