//! Journal configuration.
//!
//! Loaded from a TOML file; every section and field is optional and falls back
//! to the defaults below.
//!
//! ```toml
//! [storage]
//! db_path = "/home/me/.local/share/daily_vibes/daily_vibes.sqlite3"
//! slot_key = "daily-vibes-entries"
//!
//! [users]
//! enabled = true
//! catalog = ["Shin", "Zaw", "Cho"]
//!
//! [logging]
//! level = "info"
//! dir = "/home/me/.local/share/daily_vibes/logs"
//! ```

use crate::logging::default_log_level;
use crate::model::user::{CatalogError, UserCatalog, DEFAULT_USERS};
use crate::repo::entry_repo::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "daily_vibes";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "daily_vibes.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Serialize(toml::ser::Error),
    Catalog(CatalogError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to render config: {err}"),
            Self::Catalog(err) => write!(f, "invalid [users] section: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<CatalogError> for ConfigError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibesConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub users: UsersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_db_path() -> PathBuf {
    data_dir().join(DB_FILE_NAME)
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            slot_key: default_slot_key(),
        }
    }
}

/// Multi-user picker settings. `enabled = false` gives single-user entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersConfig {
    #[serde(default = "default_users_enabled")]
    pub enabled: bool,

    #[serde(default = "default_user_names")]
    pub catalog: Vec<String>,
}

fn default_users_enabled() -> bool {
    true
}

fn default_user_names() -> Vec<String> {
    DEFAULT_USERS.iter().map(|name| name.to_string()).collect()
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            enabled: default_users_enabled(),
            catalog: default_user_names(),
        }
    }
}

impl UsersConfig {
    /// Builds the user catalog, or `None` when multi-user is disabled.
    pub fn catalog(&self) -> Result<Option<UserCatalog>, ConfigError> {
        if !self.enabled {
            return Ok(None);
        }
        Ok(Some(UserCatalog::new(&self.catalog)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_level() -> String {
    default_log_level().to_string()
}

fn default_log_dir() -> PathBuf {
    data_dir().join("logs")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: default_log_dir(),
        }
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR))
}

/// Location of the config file used when none is given explicitly.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}

impl VibesConfig {
    /// Loads configuration.
    ///
    /// - `Some(path)`: the file must exist and parse.
    /// - `None`: reads `default_config_path()` when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::VibesConfig;

    #[test]
    fn empty_document_yields_defaults() {
        let config = VibesConfig::from_toml("").unwrap();
        assert_eq!(config, VibesConfig::default());
        assert_eq!(config.storage.slot_key, "daily-vibes-entries");
        assert!(config.users.enabled);
        assert_eq!(config.users.catalog, vec!["Shin", "Zaw", "Cho"]);
    }

    #[test]
    fn rendered_config_parses_back() {
        let config = VibesConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(VibesConfig::from_toml(&text).unwrap(), config);
    }
}
