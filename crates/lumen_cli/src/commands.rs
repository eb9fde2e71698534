//! Command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_core::Document;
use lumen_theme::{
    css, resolve_initial_mode, DetectedSystemPreference, FileStore, MemoryStore, ModeSource,
    PreferenceStore, SystemPreference, ThemeBundle, ThemeConfig, ThemeMode, ThemeState,
};
use lumen_ui::gallery::gallery;
use lumen_ui::render_page;

/// Loaded configuration plus the preference file it points at
pub struct Session {
    config: ThemeConfig,
    store: FileStore,
    system: Arc<dyn SystemPreference>,
}

impl Session {
    /// Load `config_path` (defaults when missing) and open its preference file
    pub fn open(config_path: &Path) -> Result<Self> {
        let config = ThemeConfig::load_or_default(config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;
        let store = config
            .file_store()
            .context("failed to locate the preference file")?;
        Ok(Self::new(config, store, Arc::new(DetectedSystemPreference)))
    }

    pub fn new(config: ThemeConfig, store: FileStore, system: Arc<dyn SystemPreference>) -> Self {
        Self { config, store, system }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Active mode without writing anything
    pub fn resolve(&self) -> (ThemeMode, ModeSource) {
        resolve_initial_mode(&self.config, &self.store, self.system.as_ref())
    }

    pub fn persist(&self, mode: ThemeMode) -> Result<()> {
        self.store
            .save(&self.config.storage_key, mode.as_str())
            .with_context(|| format!("failed to save preference to {}", self.store.path().display()))
    }

    /// Persist the opposite of the active mode and return it
    pub fn toggle(&self) -> Result<ThemeMode> {
        let (mode, _) = self.resolve();
        let next = mode.toggle();
        self.persist(next)?;
        Ok(next)
    }

    /// Full gallery page in `mode`, or in the resolved mode.
    ///
    /// The page's theme state runs against an in-memory copy of the
    /// preference so rendering never touches the preference file.
    pub fn gallery_page(&self, mode: Option<ThemeMode>) -> String {
        let mode = mode.unwrap_or_else(|| self.resolve().0);
        let document = Arc::new(Document::with_title("Lumen gallery"));
        let state = Arc::new(
            ThemeState::builder()
                .config(self.config.clone())
                .store(Arc::new(MemoryStore::with_entry(
                    self.config.storage_key.clone(),
                    mode.as_str(),
                )))
                .attribute_sink(document.clone())
                .build(),
        );
        tracing::info!("rendering gallery in {mode} mode");
        render_page(&document, &state, gallery())
    }
}

/// CSS variables of the built-in bundle
pub fn stylesheet() -> String {
    css::stylesheet(&ThemeBundle::default())
}

pub fn write_page(path: &Path, page: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, page).with_context(|| format!("failed to write {}", path.display()))
}

pub fn describe_source(source: ModeSource) -> &'static str {
    match source {
        ModeSource::Stored => "stored preference",
        ModeSource::System => "system preference",
        ModeSource::Default => "configured default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::{FixedSystemPreference, DEFAULT_STORAGE_KEY};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn session(dir: &TempDir, system: Option<ThemeMode>) -> Session {
        let config = ThemeConfig {
            storage_path: Some(dir.path().join("prefs.toml")),
            ..ThemeConfig::default()
        };
        let store = config.file_store().unwrap();
        Session::new(config, store, Arc::new(FixedSystemPreference(system)))
    }

    #[test]
    fn test_show_reports_source() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, Some(ThemeMode::Dark));
        assert_eq!(session.resolve(), (ThemeMode::Dark, ModeSource::System));

        session.persist(ThemeMode::Light).unwrap();
        assert_eq!(session.resolve(), (ThemeMode::Light, ModeSource::Stored));
    }

    #[test]
    fn test_toggle_twice_restores_mode() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, None);
        assert_eq!(session.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(session.toggle().unwrap(), ThemeMode::Light);

        let saved = fs::read_to_string(dir.path().join("prefs.toml")).unwrap();
        assert!(saved.contains(&format!("{DEFAULT_STORAGE_KEY} = \"light\"")));
    }

    #[test]
    fn test_gallery_leaves_preferences_alone() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, None);
        let page = session.gallery_page(Some(ThemeMode::Dark));
        assert!(page.starts_with("<!DOCTYPE html>\n<html data-theme=\"dark\">"));
        assert!(page.contains("<title>Lumen gallery</title>"));
        assert!(!dir.path().join("prefs.toml").exists());
    }

    #[test]
    fn test_open_reads_storage_path() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("lumen.toml");
        fs::write(
            &config,
            format!("storage_path = {:?}\n", dir.path().join("p.toml").display().to_string()),
        )
        .unwrap();
        let session = Session::open(&config).unwrap();
        assert_eq!(session.store().path(), dir.path().join("p.toml"));
    }

    #[test]
    fn test_open_reports_bad_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("lumen.toml");
        fs::write(&config, "default_mode = \"sepia\"").unwrap();
        let err = Session::open(&config).err().unwrap();
        assert!(err.to_string().contains("lumen.toml"));
    }

    #[test]
    fn test_write_page_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("gallery.html");
        write_page(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_stylesheet_covers_both_modes() {
        let css = stylesheet();
        assert!(css.contains(":root[data-theme=\"light\"]"));
        assert!(css.contains(":root[data-theme=\"dark\"]"));
    }
}
