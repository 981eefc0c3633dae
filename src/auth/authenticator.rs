//! Credential verification against the account directory.

use crate::directory::{Account, AccountDirectory, Credential};
use crate::error::AuthError;
use std::sync::Arc;
use tracing::debug;

/// Login credentials presented by the transfer engine.
#[derive(Debug, Clone)]
pub enum Credentials {
    Password {
        username: String,
        password: Credential,
    },
    Anonymous,
}

impl Credentials {
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            username: username.into(),
            password: Credential::new(password),
        }
    }
}

/// Checks presented credentials against an [`AccountDirectory`].
#[derive(Debug, Clone)]
pub struct Authenticator {
    directory: Arc<AccountDirectory>,
}

impl Authenticator {
    pub fn new(directory: Arc<AccountDirectory>) -> Self {
        Self { directory }
    }

    /// Return the account for `username` if `password` matches and the
    /// account is enabled.
    ///
    /// Unknown users, wrong passwords and disabled accounts all fail with
    /// the same [`AuthError::AuthenticationFailed`].
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Arc<Account>, AuthError> {
        let Some(account) = self.directory.get(username) else {
            debug!(username = %username, "login rejected");
            return Err(AuthError::AuthenticationFailed);
        };

        // Compare before checking `enabled` so both failure paths do the same work
        let matches = account.credential().matches(password);
        if !matches || !account.enabled() {
            debug!(username = %username, "login rejected");
            return Err(AuthError::AuthenticationFailed);
        }

        debug!(username = %username, "login accepted");
        Ok(account)
    }

    /// Authenticate any supported [`Credentials`] form.
    ///
    /// Only username/password logins are supported; anonymous logins fail.
    pub fn login(&self, credentials: &Credentials) -> Result<Arc<Account>, AuthError> {
        match credentials {
            Credentials::Password { username, password } => {
                self.authenticate(username, password.expose())
            }
            Credentials::Anonymous => {
                debug!("anonymous login rejected");
                Err(AuthError::AuthenticationFailed)
            }
        }
    }
}
