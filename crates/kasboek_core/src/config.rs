//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - An empty or whitespace-only variable counts as unset.
//! - `log_dir`, when set, is absolute.
//! - `log_level` is one of `trace|debug|info|warn|error`.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "KASBOEK_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "KASBOEK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "KASBOEK_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "kasboek.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    InvalidLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) | Self::InvalidLogDir(message) => {
                write!(f, "{message}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Application settings shared by every entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding every entity store.
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads `KASBOEK_DB_PATH`, `KASBOEK_LOG_LEVEL` and `KASBOEK_LOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(db_path) = read(DB_PATH_ENV) {
            config.db_path = PathBuf::from(db_path);
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        config.log_dir = read(LOG_DIR_ENV).map(PathBuf::from);

        config.validate()
    }

    /// Normalizes the log level and checks the log directory.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::InvalidLogLevel)?
            .to_string();
        if let Some(log_dir) = &self.log_dir {
            normalize_log_dir(log_dir).map_err(ConfigError::InvalidLogDir)?;
        }
        Ok(self)
    }
}
