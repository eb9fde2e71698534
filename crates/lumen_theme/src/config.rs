//! Theme configuration (`lumen.toml`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::mode::ThemeMode;
use crate::storage::{FileStore, DEFAULT_STORAGE_KEY};

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Key the mode is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Mode used when nothing is stored and the OS has no preference
    #[serde(default)]
    pub default_mode: ThemeMode,

    /// Consult the OS preference during initialization
    #[serde(default = "default_true")]
    pub respect_system_preference: bool,

    /// Preference file; the platform config directory when unset
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_mode: ThemeMode::default(),
            respect_system_preference: true,
            storage_path: None,
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(content: &str, origin: impl Into<PathBuf>) -> Result<Self> {
        toml::from_str(content).map_err(|err| ThemeError::toml_de(origin, err))
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| ThemeError::io(path, err))?;
        Self::from_toml_str(&content, path)
    }

    /// Load from a file, or use defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("{} not found, using default theme config", path.display());
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The preference file store this configuration points at
    pub fn file_store(&self) -> Result<FileStore> {
        match &self.storage_path {
            Some(path) => Ok(FileStore::new(path)),
            None => FileStore::at_default_location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = ThemeConfig::from_toml_str("default_mode = \"dark\"", "lumen.toml").unwrap();
        assert_eq!(config.default_mode, ThemeMode::Dark);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.respect_system_preference);
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn test_round_trip() {
        let config = ThemeConfig {
            storage_key: "app-mode".into(),
            default_mode: ThemeMode::Dark,
            respect_system_preference: false,
            storage_path: Some(PathBuf::from("/tmp/prefs.toml")),
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&text, "x").unwrap(), config);
    }

    #[test]
    fn test_invalid_mode_is_parse_error() {
        let err = ThemeConfig::from_toml_str("default_mode = \"sepia\"", "lumen.toml").unwrap_err();
        assert!(matches!(err, ThemeError::TomlDe { .. }));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ThemeConfig::load_or_default(&dir.path().join("lumen.toml")).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }
}
