//! Theme state
//!
//! `ThemeState` owns the active mode and the `Theme` derived from it. Every
//! mode change replaces the shared `Arc<Theme>` wholesale, persists the mode,
//! mirrors it onto the document root and notifies listeners.
//!
//! A process-wide instance can be installed with [`ThemeState::init`] and
//! read back with [`ThemeState::get`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use lumen_core::AttributeSink;

use crate::config::ThemeConfig;
use crate::css::THEME_ATTRIBUTE;
use crate::mode::ThemeMode;
use crate::storage::{MemoryStore, PreferenceStore};
use crate::system::{NoSystemPreference, SystemPreference};
use crate::theme::{Theme, ThemeBundle};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Mode change listener
pub type ThemeListener = Arc<dyn Fn(ThemeMode) + Send + Sync>;

/// Handle returned by [`ThemeState::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Where the initial mode came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSource {
    Stored,
    System,
    Default,
}

/// Pick the initial mode: stored preference, then OS preference, then the
/// configured default.
pub fn resolve_initial_mode(
    config: &ThemeConfig,
    store: &dyn PreferenceStore,
    system: &dyn SystemPreference,
) -> (ThemeMode, ModeSource) {
    match store.load(&config.storage_key) {
        Ok(Some(value)) => match value.parse::<ThemeMode>() {
            Ok(mode) => return (mode, ModeSource::Stored),
            Err(err) => tracing::warn!("ignoring stored theme preference: {err}"),
        },
        Ok(None) => {}
        Err(err) => tracing::warn!("failed to read theme preference: {err}"),
    }

    if config.respect_system_preference {
        if let Some(mode) = system.preferred_mode() {
            return (mode, ModeSource::System);
        }
    }

    (config.default_mode, ModeSource::Default)
}

/// Builder for [`ThemeState`]
pub struct ThemeStateBuilder {
    bundle: ThemeBundle,
    config: ThemeConfig,
    store: Arc<dyn PreferenceStore>,
    system: Arc<dyn SystemPreference>,
    sink: Option<Arc<dyn AttributeSink>>,
}

impl ThemeStateBuilder {
    pub fn bundle(mut self, bundle: ThemeBundle) -> Self {
        self.bundle = bundle;
        self
    }

    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = store;
        self
    }

    pub fn system_preference(mut self, system: Arc<dyn SystemPreference>) -> Self {
        self.system = system;
        self
    }

    /// Mirror the mode onto this document root
    pub fn attribute_sink(mut self, sink: Arc<dyn AttributeSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Resolve the initial mode, then mirror and persist it
    pub fn build(self) -> ThemeState {
        let (mode, source) =
            resolve_initial_mode(&self.config, self.store.as_ref(), self.system.as_ref());
        tracing::debug!("ThemeState initialized in {mode} mode ({source:?})");

        let theme = Arc::new(self.bundle.for_mode(mode));
        let state = ThemeState {
            bundle: self.bundle,
            config: self.config,
            store: self.store,
            sink: self.sink,
            mode: RwLock::new(mode),
            theme: RwLock::new(theme),
            listeners: RwLock::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        };
        state.mirror(mode);
        state.persist(mode);
        state
    }
}

/// Active theme mode and derived theme, shared by every build pass
pub struct ThemeState {
    bundle: ThemeBundle,
    config: ThemeConfig,
    store: Arc<dyn PreferenceStore>,
    sink: Option<Arc<dyn AttributeSink>>,

    /// Current mode
    mode: RwLock<ThemeMode>,

    /// Theme for the current mode, replaced on every change
    theme: RwLock<Arc<Theme>>,

    listeners: RwLock<Vec<(ListenerId, ThemeListener)>>,
    next_listener: AtomicU64,
}

impl ThemeState {
    /// Builder with the built-in bundle, default config, an in-memory store,
    /// no OS preference and no document
    pub fn builder() -> ThemeStateBuilder {
        ThemeStateBuilder {
            bundle: ThemeBundle::default(),
            config: ThemeConfig::default(),
            store: Arc::new(MemoryStore::new()),
            system: Arc::new(NoSystemPreference),
            sink: None,
        }
    }

    /// State fixed to a mode, with nothing persisted anywhere that outlives it
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self::builder()
            .config(ThemeConfig {
                default_mode: mode,
                respect_system_preference: false,
                ..ThemeConfig::default()
            })
            .build()
    }

    /// Install the global theme state (call once at app startup).
    ///
    /// Later calls are ignored and return `false`.
    pub fn init(state: ThemeState) -> bool {
        let installed = THEME_STATE.set(state).is_ok();
        if !installed {
            tracing::warn!("ThemeState::init called more than once; keeping the first state");
        }
        installed
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Mode ==========

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current theme
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.theme.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Set the mode explicitly. Setting the active mode does nothing.
    pub fn set_theme(&self, mode: ThemeMode) {
        self.switch(|_| mode);
    }

    /// Flip between light and dark
    pub fn toggle_theme(&self) {
        self.switch(ThemeMode::toggle);
    }

    /// Apply `next` to the current mode. The store and the document
    /// attribute are written under the mode lock, so concurrent switches
    /// leave both agreeing with `mode()`. Listeners run after release.
    fn switch(&self, next: impl FnOnce(ThemeMode) -> ThemeMode) {
        let mode = {
            let mut current = self.mode.write().unwrap_or_else(PoisonError::into_inner);
            let mode = next(*current);
            if *current == mode {
                return;
            }
            tracing::debug!("ThemeState::set_theme - switching from {} to {}", *current, mode);
            *current = mode;
            *self.theme.write().unwrap_or_else(PoisonError::into_inner) =
                Arc::new(self.bundle.for_mode(mode));
            self.persist(mode);
            self.mirror(mode);
            mode
        };

        self.notify(mode);
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    // ========== Listeners ==========

    /// Register a callback run after every mode change
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(existing, _)| *existing != id);
    }

    // ========== Side Effects ==========

    fn persist(&self, mode: ThemeMode) {
        if let Err(err) = self.store.save(&self.config.storage_key, mode.as_str()) {
            tracing::warn!("failed to persist theme preference: {err}");
        }
    }

    fn mirror(&self, mode: ThemeMode) {
        if let Some(sink) = &self.sink {
            sink.set_attribute(THEME_ATTRIBUTE, mode.as_str());
        }
    }

    fn notify(&self, mode: ThemeMode) {
        // Clone out so listeners may subscribe or read the state re-entrantly
        let listeners: Vec<ThemeListener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(mode);
        }
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("bundle", &self.bundle.name())
            .field("mode", &self.mode())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ThemeError};
    use crate::system::FixedSystemPreference;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(ThemeError::NoConfigDir)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<()> {
            Err(ThemeError::NoConfigDir)
        }
    }

    #[test]
    fn test_set_same_mode_is_noop() {
        let state = ThemeState::with_mode(ThemeMode::Light);
        let before = state.theme();
        state.set_theme(ThemeMode::Light);
        assert!(Arc::ptr_eq(&before, &state.theme()));
    }

    #[test]
    fn test_theme_replaced_on_change() {
        let state = ThemeState::with_mode(ThemeMode::Light);
        let before = state.theme();
        state.toggle_theme();
        let after = state.theme();
        assert_eq!(before.mode(), ThemeMode::Light);
        assert_eq!(after.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_broken_store_is_ignored() {
        let state = ThemeState::builder()
            .store(Arc::new(BrokenStore))
            .system_preference(Arc::new(FixedSystemPreference(Some(ThemeMode::Dark))))
            .build();
        assert_eq!(state.mode(), ThemeMode::Dark);
        state.toggle_theme();
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_concurrent_switches_stay_consistent() {
        use lumen_core::Document;

        let store = Arc::new(MemoryStore::new());
        let document = Arc::new(Document::new());
        let state = Arc::new(
            ThemeState::builder()
                .store(store.clone())
                .system_preference(Arc::new(FixedSystemPreference(None)))
                .attribute_sink(document.clone())
                .build(),
        );

        let workers: Vec<_> = (0..8)
            .map(|i| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    for n in 0..200 {
                        if (i + n) % 3 == 0 {
                            state.toggle_theme();
                        } else {
                            state.set_theme(ThemeMode::ALL[(i + n) % 2]);
                        }
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let mode = state.mode();
        assert_eq!(state.theme().mode(), mode);
        assert_eq!(
            store.load(&state.config().storage_key).unwrap().as_deref(),
            Some(mode.as_str())
        );
        assert_eq!(document.attribute(THEME_ATTRIBUTE).as_deref(), Some(mode.as_str()));
    }

    #[test]
    fn test_unsubscribe() {
        use std::sync::atomic::AtomicUsize;

        let state = ThemeState::with_mode(ThemeMode::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let id = state.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        state.toggle_theme();
        state.unsubscribe(id);
        state.toggle_theme();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
