use lumen_core::Color;
use lumen_theme::{get_theme_value, Theme, ThemeMode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Sentinel no built-in token uses
const SENTINEL: &str = "__fallback__";

fn string_leaves(value: &Value, prefix: &mut Vec<String>, out: &mut Vec<(Vec<String>, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                prefix.push(key.clone());
                string_leaves(child, prefix, out);
                prefix.pop();
            }
        }
        other => out.push((prefix.clone(), other.clone())),
    }
}

#[test]
fn present_paths_resolve_to_theme_value() {
    for theme in [Theme::light(), Theme::dark()] {
        let mut leaves = Vec::new();
        string_leaves(theme.tokens(), &mut Vec::new(), &mut leaves);
        for (path, value) in leaves {
            let resolved: Value = get_theme_value(&theme, &path, json!(SENTINEL));
            assert_eq!(resolved, value, "path={path:?}");
        }
    }
}

#[test]
fn absent_paths_return_exact_fallback() {
    let partial = Theme::from_json(
        ThemeMode::Light,
        json!({
            "colors": { "primary": { "main": "#123456" } },
            "spacing": { "md": 10 }
        }),
    );

    let cases: &[&[&str]] = &[
        &["colors", "primary", "dark"],
        &["colors", "secondary", "main"],
        &["colors", "primary", "main", "deeper"],
        &["spacing", "lg"],
        &["shadows"],
        &["typography", "h1", "fontSize"],
    ];

    for path in cases {
        let value: String = get_theme_value(&partial, *path, SENTINEL.to_string());
        assert_eq!(value, SENTINEL, "path={path:?}");
    }
}

#[test]
fn typed_helpers_fall_back_on_mock_theme() {
    let empty = Theme::from_json(ThemeMode::Dark, json!({}));
    assert_eq!(empty.color("primary.main", Color::from_hex(0xABCDEF)), Color::from_hex(0xABCDEF));
    assert_eq!(empty.spacing("md", 12.5), 12.5);
    assert_eq!(empty.radius("md", 3.0), 3.0);
    assert_eq!(empty.shadow("md", "none"), "none");
    assert_eq!(empty.z_index("modal", 42), 42);
    assert_eq!(empty.breakpoint("md", 1.0), 1.0);
    assert_eq!(empty.font_size("md", 15.0), 15.0);
}

#[test]
fn non_object_root_falls_back() {
    let broken = Theme::from_json(ThemeMode::Light, json!("not a theme"));
    assert_eq!(broken.spacing("md", 8.0), 8.0);
    let value: f32 = get_theme_value(&broken, "spacing.md", 8.0);
    assert_eq!(value, 8.0);
}
