use lumen_core::Color;
use lumen_theme::{
    LumenTheme, Palette, SpacingToken, TextVariant, Theme, ThemeBundle, ThemeMode,
};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn leaf_paths(value: &Value, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                prefix.push(key.clone());
                leaf_paths(child, prefix, out);
                prefix.pop();
            }
        }
        _ => out.push(prefix.clone()),
    }
}

fn all_leaf_paths(theme: &Theme) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    leaf_paths(theme.tokens(), &mut Vec::new(), &mut out);
    out
}

#[test]
fn light_and_dark_define_the_same_paths() {
    let light = all_leaf_paths(&Theme::light());
    let dark = all_leaf_paths(&Theme::dark());
    assert!(light.len() > 100, "token tree unexpectedly small: {}", light.len());
    assert_eq!(light, dark);
}

#[test]
fn palettes_differ_between_modes() {
    let bundle = ThemeBundle::default();
    let light = bundle.for_mode(ThemeMode::Light);
    let dark = bundle.for_mode(ThemeMode::Dark);

    for palette in Palette::ALL {
        assert_ne!(
            light.palette_color(palette, "main", Color::TRANSPARENT),
            dark.palette_color(palette, "main", Color::TRANSPARENT),
            "palette={palette:?}"
        );
    }
}

#[test]
fn every_palette_has_four_shades() {
    for theme in [Theme::light(), Theme::dark()] {
        for palette in Palette::ALL {
            for shade in ["light", "main", "dark", "contrastText"] {
                assert!(
                    lumen_theme::resolve(theme.tokens(), ["colors", palette.key(), shade]).is_some(),
                    "mode={} palette={palette:?} shade={shade}",
                    theme.mode()
                );
            }
        }
    }
}

#[test]
fn spacing_scale_is_increasing() {
    let tokens = LumenTheme::light().spacing;
    let values: Vec<f32> = SpacingToken::ALL.iter().map(|t| tokens.get(*t)).collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");

    let theme = Theme::light();
    for token in SpacingToken::ALL {
        assert_eq!(theme.spacing(token.key(), -1.0), tokens.get(token));
    }
}

#[test]
fn text_variants_resolve_from_tree() {
    let theme = Theme::dark();
    let expected = LumenTheme::dark().typography;
    for variant in TextVariant::ALL {
        assert_eq!(&theme.text_style(variant), expected.variants.get(variant));
    }
}

#[test]
fn grey_scale_keys_are_numeric() {
    let theme = Theme::light();
    for weight in [50, 100, 200, 300, 400, 500, 600, 700, 800, 900] {
        let path = format!("grey.{weight}");
        assert_ne!(theme.color(path.as_str(), Color::TRANSPARENT), Color::TRANSPARENT);
    }
}
