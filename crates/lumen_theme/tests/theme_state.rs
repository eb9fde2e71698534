use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lumen_core::{AttributeSink, Document};
use lumen_theme::{
    FileStore, FixedSystemPreference, MemoryStore, ModeSource, NoSystemPreference,
    PreferenceStore, ThemeConfig, ThemeMode, ThemeState, DEFAULT_STORAGE_KEY,
};
use pretty_assertions::assert_eq;

fn state_with(
    store: Arc<MemoryStore>,
    system: Option<ThemeMode>,
    default_mode: ThemeMode,
) -> ThemeState {
    ThemeState::builder()
        .config(ThemeConfig {
            default_mode,
            ..ThemeConfig::default()
        })
        .store(store)
        .system_preference(Arc::new(FixedSystemPreference(system)))
        .build()
}

#[test]
fn stored_preference_wins_over_system_and_default() {
    let store = Arc::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "dark"));
    let state = state_with(store, Some(ThemeMode::Light), ThemeMode::Light);
    assert_eq!(state.mode(), ThemeMode::Dark);
}

#[test]
fn system_preference_wins_over_default() {
    let state = state_with(Arc::new(MemoryStore::new()), Some(ThemeMode::Dark), ThemeMode::Light);
    assert_eq!(state.mode(), ThemeMode::Dark);
}

#[test]
fn default_used_when_nothing_else_is_known() {
    let state = state_with(Arc::new(MemoryStore::new()), None, ThemeMode::Dark);
    assert_eq!(state.mode(), ThemeMode::Dark);
}

#[test]
fn invalid_stored_value_is_ignored() {
    let store = Arc::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "sepia"));
    let state = state_with(store, Some(ThemeMode::Dark), ThemeMode::Light);
    assert_eq!(state.mode(), ThemeMode::Dark);
}

#[test]
fn system_preference_can_be_disabled() {
    let config = ThemeConfig {
        respect_system_preference: false,
        ..ThemeConfig::default()
    };
    let (mode, source) = lumen_theme::resolve_initial_mode(
        &config,
        &MemoryStore::new(),
        &FixedSystemPreference(Some(ThemeMode::Dark)),
    );
    assert_eq!(mode, ThemeMode::Light);
    assert_eq!(source, ModeSource::Default);
}

#[test]
fn initialization_persists_and_mirrors_mode() {
    let store = Arc::new(MemoryStore::new());
    let document = Arc::new(Document::new());
    let state = ThemeState::builder()
        .store(store.clone())
        .system_preference(Arc::new(NoSystemPreference))
        .attribute_sink(document.clone())
        .build();

    assert_eq!(state.mode(), ThemeMode::Light);
    assert_eq!(document.attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_mode_and_persists_last_value() {
    let store = Arc::new(MemoryStore::new());
    let document = Arc::new(Document::new());
    let state = ThemeState::builder()
        .store(store.clone())
        .attribute_sink(document.clone())
        .build();

    let original = state.mode();
    state.toggle_theme();
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(document.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(state.theme().mode(), ThemeMode::Dark);

    state.toggle_theme();
    assert_eq!(state.mode(), original);
    assert_eq!(
        store.load(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some(original.as_str())
    );
    assert_eq!(document.attribute("data-theme").as_deref(), Some(original.as_str()));
}

#[test]
fn set_theme_uses_configured_key() {
    let store = Arc::new(MemoryStore::new());
    let state = ThemeState::builder()
        .config(ThemeConfig {
            storage_key: "my-app-mode".into(),
            ..ThemeConfig::default()
        })
        .store(store.clone())
        .build();

    state.set_theme(ThemeMode::Dark);
    assert_eq!(store.load("my-app-mode").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn listeners_only_fire_on_change() {
    let state = ThemeState::with_mode(ThemeMode::Light);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    state.subscribe(move |mode| {
        assert_eq!(mode, ThemeMode::Dark);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    state.set_theme(ThemeMode::Dark);
    state.set_theme(ThemeMode::Dark);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lumen").join("preferences.toml");

    {
        let state = ThemeState::builder()
            .store(Arc::new(FileStore::new(&path)))
            .build();
        state.set_theme(ThemeMode::Dark);
    }

    let restarted = ThemeState::builder()
        .store(Arc::new(FileStore::new(&path)))
        .system_preference(Arc::new(FixedSystemPreference(Some(ThemeMode::Light))))
        .build();
    assert_eq!(restarted.mode(), ThemeMode::Dark);
}
