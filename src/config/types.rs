//! Core configuration types and loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::accounts::{AccountDefaults, HomeDirectoryPolicy, SeedAccount};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server information.
    pub server: ServerConfig,
    /// Values applied to seed accounts that do not set their own.
    #[serde(default)]
    pub defaults: AccountDefaults,
    /// Accounts to seed at startup. When empty, the built-in set is used.
    #[serde(default, rename = "account")]
    pub accounts: Vec<SeedAccount>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Server identity and filesystem layout.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name used in log lines (e.g., "ftp.example.net").
    pub name: String,
    /// Directory under which every account gets `<home_root>/<username>`.
    pub home_root: PathBuf,
    /// What to do when an account's home directory cannot be created.
    #[serde(default)]
    pub on_home_error: HomeDirectoryPolicy,
}
