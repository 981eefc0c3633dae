//! Unified error handling for ftp-userdir.
//!
//! Each error family carries a static `error_code()` so log lines and
//! engine-side counters can label failures without formatting them.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Authentication Errors (session establishment)
// ============================================================================

/// Errors returned when a session tries to log in.
///
/// There is deliberately a single variant: an unknown username, a wrong
/// credential and a disabled account are indistinguishable to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authentication failed")]
    AuthenticationFailed,
}

impl AuthError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication_failed",
        }
    }
}

// ============================================================================
// Account Errors (construction and provisioning)
// ============================================================================

/// Errors raised while building an [`Account`](crate::directory::Account).
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("home directory {} could not be created: {source}", .path.display())]
    HomeDirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid username: {0:?}")]
    InvalidUsername(String),
}

impl AccountError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HomeDirectoryUnavailable { .. } => "home_directory_unavailable",
            Self::InvalidUsername(_) => "invalid_username",
        }
    }
}

// ============================================================================
// Initialization Errors (directory seeding)
// ============================================================================

/// Errors that stop directory initialization.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to seed account {username}: {source}")]
    Account {
        username: String,
        #[source]
        source: AccountError,
    },
}

impl InitError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Account { source, .. } => source.error_code(),
        }
    }
}
