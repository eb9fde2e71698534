//! Errors raised by preference storage and configuration loading

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    TomlDe {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid theme mode {0:?} (expected \"light\" or \"dark\")")]
    InvalidMode(String),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn toml_de(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::TomlDe {
            path: path.into(),
            source,
        }
    }
}
