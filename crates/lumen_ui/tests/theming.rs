use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lumen_core::{div, Document};
use lumen_theme::{
    FixedSystemPreference, MemoryStore, PreferenceStore, ThemeConfig, DEFAULT_STORAGE_KEY,
};
use lumen_ui::prelude::*;
use lumen_ui::{render_page_with, ThemeStateHandle};
use pretty_assertions::assert_eq;
use serde_json::json;

fn live_state(store: Arc<MemoryStore>, document: Arc<Document>) -> Arc<ThemeState> {
    Arc::new(
        ThemeState::builder()
            .store(store)
            .system_preference(Arc::new(FixedSystemPreference(Some(ThemeMode::Light))))
            .attribute_sink(document)
            .build(),
    )
}

fn theme_attr(document: &Document) -> Option<String> {
    document
        .attributes()
        .into_iter()
        .find(|(name, _)| name == "data-theme")
        .map(|(_, value)| value)
}

#[test]
fn provider_root_carries_mode_and_colors() {
    let root = ThemeProvider::with_mode(ThemeMode::Dark)
        .child(div().class("inner"))
        .build(&BuildContext::new());
    let dark = Theme::dark();
    assert_eq!(root.get_attr("data-theme"), Some("dark"));
    assert_eq!(
        root.style_value("background-color").map(str::to_string),
        Some(dark.color("background.default", Color::WHITE).to_css())
    );
    assert!(root.find_by_class("inner").is_some());
}

#[test]
fn mocked_theme_falls_back_for_missing_tokens() {
    let mock = Theme::from_json(
        ThemeMode::Light,
        json!({ "colors": { "primary": { "main": "#ff0000" } } }),
    );
    let root = ThemeProvider::fixed(mock)
        .child(button("Go").contained())
        .build(&BuildContext::new());

    let button = root.find_by_class("lumen-button").unwrap();
    assert_eq!(
        button.style_value("background-color"),
        Some(Color::from_hex(0xFF0000).to_css().as_str())
    );
    assert!(button.style_value("padding").is_some());
}

#[test]
#[should_panic(expected = "ThemeProvider")]
fn components_outside_a_provider_panic() {
    button("Orphan").build(&BuildContext::new());
}

#[test]
fn nested_provider_overrides_outer_scope() {
    let root = ThemeProvider::with_mode(ThemeMode::Light)
        .child(ThemeProvider::with_mode(ThemeMode::Dark).child(theme_toggle()))
        .build(&BuildContext::new());
    let toggle = root.find_by_class("lumen-icon-button").unwrap();
    assert_eq!(toggle.get_attr("data-mode"), Some("dark"));
    assert_eq!(toggle.get_attr("disabled"), Some(""));
}

#[test]
fn toggle_persists_and_mirrors_the_document() {
    let store = Arc::new(MemoryStore::new());
    let document = Arc::new(Document::with_title("Lumen"));
    let state = live_state(store.clone(), document.clone());
    assert_eq!(state.mode(), ThemeMode::Light);
    assert_eq!(theme_attr(&document).as_deref(), Some("light"));

    let toggles = Arc::new(AtomicUsize::new(0));
    let counter = toggles.clone();
    let page = ThemeProvider::new(state.clone()).child(theme_toggle().on_toggle(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    let cx = BuildContext::new();

    let click = || {
        page.build(&cx)
            .find_by_class("lumen-icon-button")
            .unwrap()
            .dispatch(&Event::click());
    };

    click();
    assert_eq!(state.mode(), ThemeMode::Dark);
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(theme_attr(&document).as_deref(), Some("dark"));
    assert_eq!(page.build(&cx).get_attr("data-theme"), Some("dark"));

    click();
    assert_eq!(state.mode(), ThemeMode::Light);
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(theme_attr(&document).as_deref(), Some("light"));
    assert_eq!(toggles.load(Ordering::SeqCst), 2);
}

#[test]
fn stored_preference_is_restored_on_next_start() {
    let store = Arc::new(MemoryStore::new());
    live_state(store.clone(), Arc::new(Document::new())).set_theme(ThemeMode::Dark);

    let document = Arc::new(Document::new());
    let restarted = live_state(store, document.clone());
    assert_eq!(restarted.mode(), ThemeMode::Dark);
    assert_eq!(theme_attr(&document).as_deref(), Some("dark"));
}

#[test]
fn custom_storage_key_is_honoured() {
    let store = Arc::new(MemoryStore::with_entry("app-mode", "dark"));
    let state = ThemeState::builder()
        .config(ThemeConfig {
            storage_key: "app-mode".to_string(),
            ..ThemeConfig::default()
        })
        .store(store.clone())
        .build();
    assert_eq!(state.mode(), ThemeMode::Dark);
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn theme_state_handle_is_exposed_to_components() {
    let state = Arc::new(ThemeState::with_mode(ThemeMode::Dark));
    let cx = BuildContext::new().with_theme_state(state.clone());
    let handle: ThemeStateHandle = cx.theme_state().unwrap();
    handle.set_theme(ThemeMode::Light);
    assert_eq!(state.mode(), ThemeMode::Light);
    assert_eq!(cx.theme().mode(), ThemeMode::Light);
}

#[test]
fn gallery_renders_in_both_modes() {
    for mode in ThemeMode::ALL {
        let document = Arc::new(Document::with_title("Gallery"));
        let state = live_state(Arc::new(MemoryStore::new()), document.clone());
        state.set_theme(mode);
        let cx = BuildContext::new();

        let html = render_page_with(&document, &state, gallery(), &cx);
        assert!(html.starts_with(&format!(
            "<!DOCTYPE html>\n<html data-theme=\"{}\">",
            mode.as_str()
        )));
        assert!(html.contains(":root[data-theme=\"dark\"]"));
        for class in [
            "lumen-tabs",
            "lumen-pagination",
            "lumen-breadcrumbs",
            "lumen-image",
            "lumen-alert",
            "lumen-checkbox",
        ] {
            assert!(html.contains(class), "{class} missing in {mode} gallery");
        }
    }
}

#[test]
fn gallery_toggle_switches_the_rendered_page() {
    let document = Arc::new(Document::new());
    let state = live_state(Arc::new(MemoryStore::new()), document.clone());
    let cx = BuildContext::new();

    let root = ThemeProvider::new(state.clone()).child(gallery()).build(&cx);
    root.find_by_attr("id", "gallery-theme-toggle")
        .unwrap()
        .dispatch(&Event::click());

    let html = render_page_with(&document, &state, gallery(), &cx);
    assert!(html.contains("<html data-theme=\"dark\">"));
    let body = ThemeProvider::new(state).child(gallery()).build(&cx);
    assert_eq!(body.get_attr("data-theme"), Some("dark"));
}
