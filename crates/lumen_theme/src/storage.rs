//! Durable theme preference storage
//!
//! The theme state persists the chosen mode under a single key. Reads and
//! writes are best-effort: the state logs failures and carries on.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::error::{Result, ThemeError};

/// Default key under which the mode is stored
pub const DEFAULT_STORAGE_KEY: &str = "lumen-theme-mode";

/// Key/value preference store
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used by tests and embedders without a filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        store
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML file of string entries (`lumen-theme-mode = "dark"`)
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/lumen/preferences.toml`
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("lumen").join("preferences.toml"))
            .ok_or(ThemeError::NoConfigDir)
    }

    pub fn at_default_location() -> Result<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table> {
        match fs::read_to_string(&self.path) {
            Ok(content) => content
                .parse::<toml::Table>()
                .map_err(|err| ThemeError::toml_de(&self.path, err)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(err) => Err(ThemeError::io(&self.path, err)),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let table = self.read_table()?;
        Ok(table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| ThemeError::io(parent, err))?;
            }
        }

        let content = toml::to_string(&table)?;
        fs::write(&self.path, content).map_err(|err| ThemeError::io(&self.path, err))?;
        tracing::debug!("saved preference {key}={value:?} to {}", self.path.display());
        Ok(())
    }
}
