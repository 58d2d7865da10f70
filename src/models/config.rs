use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in a project directory
pub const CONFIG_FILE_NAME: &str = "usersvc.toml";

/// Configuration loaded from usersvc.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Where user data is expected to live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the user data file
    #[serde(default = "default_config_path")]
    pub config_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
        }
    }
}

fn default_config_path() -> String {
    crate::core::DEFAULT_CONFIG_PATH.to_string()
}

/// Limits configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of live users a service may hold
    #[serde(default = "default_max_users")]
    pub max_users: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_users: default_max_users(),
        }
    }
}

fn default_max_users() -> usize {
    crate::core::MAX_USERS
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from usersvc.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, config_path: Option<String>, max_users: Option<usize>) -> Self {
        if let Some(p) = config_path {
            self.storage.config_path = p;
        }
        if let Some(m) = max_users {
            self.limits.max_users = m;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
