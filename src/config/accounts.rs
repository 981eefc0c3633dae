//! Seed account configuration.

use crate::directory::Credential;
use serde::Deserialize;

/// Policy for accounts whose home directory cannot be created at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeDirectoryPolicy {
    /// Stop initialization on the first failure.
    #[default]
    Abort,
    /// Log a warning and leave the account out of the directory.
    Skip,
}

/// Values applied to seed accounts that leave them unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountDefaults {
    /// Maximum idle time in seconds (default: 60000).
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
    /// Concurrent sessions per account, 0 = unlimited (default: 10).
    #[serde(default = "default_max_logins")]
    pub max_logins: u32,
    /// Concurrent sessions per client IP, 0 = unlimited (default: 10).
    #[serde(default = "default_max_logins")]
    pub max_logins_per_ip: u32,
    /// Upload and download limit in bytes per second, 0 = unlimited
    /// (default: 10 GB/s).
    #[serde(default = "default_transfer_rate")]
    pub transfer_rate: u64,
}

impl Default for AccountDefaults {
    fn default() -> Self {
        Self {
            idle_timeout: default_idle_timeout(),
            max_logins: default_max_logins(),
            max_logins_per_ip: default_max_logins(),
            transfer_rate: default_transfer_rate(),
        }
    }
}

fn default_idle_timeout() -> u64 {
    crate::directory::DEFAULT_MAX_IDLE_SECONDS
}

fn default_max_logins() -> u32 {
    10
}

fn default_transfer_rate() -> u64 {
    10_000_000_000
}

fn default_true() -> bool {
    true
}

/// One `[[account]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAccount {
    pub username: String,
    pub password: Credential,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Grant write access (default: true).
    #[serde(default = "default_true")]
    pub write: bool,
    pub max_logins: Option<u32>,
    pub max_logins_per_ip: Option<u32>,
    pub transfer_rate: Option<u64>,
    pub idle_timeout: Option<u64>,
}

impl SeedAccount {
    /// An enabled account with write access and no overrides.
    pub fn new(username: impl Into<String>, password: impl Into<Credential>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            enabled: true,
            write: true,
            max_logins: None,
            max_logins_per_ip: None,
            transfer_rate: None,
            idle_timeout: None,
        }
    }

    /// Accounts seeded when the configuration lists none.
    pub fn builtin() -> Vec<SeedAccount> {
        ["jlong", "jhoeller", "mbhave"]
            .into_iter()
            .map(|name| SeedAccount::new(name, "pw"))
            .collect()
    }
}
