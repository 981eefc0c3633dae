//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::directory::validate_username;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.home_root is required")]
    MissingHomeRoot,
    #[error("account username {0:?} cannot be used as a directory name")]
    InvalidUsername(String),
    #[error("account {0:?} is defined more than once")]
    DuplicateAccount(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Required fields
    if config.server.name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    }
    if config.server.home_root.as_os_str().is_empty() {
        errors.push(ValidationError::MissingHomeRoot);
    }

    let mut seen = HashSet::new();
    for account in &config.accounts {
        if validate_username(&account.username).is_err() {
            errors.push(ValidationError::InvalidUsername(account.username.clone()));
        } else if !seen.insert(account.username.as_str()) {
            errors.push(ValidationError::DuplicateAccount(account.username.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
