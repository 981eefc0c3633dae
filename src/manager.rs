//! The user manager handed to the transfer engine.
//!
//! `UserManager` bundles the shared [`AccountDirectory`] with an
//! [`Authenticator`] and an [`Authorizer`], so the engine holds a single
//! cheap-to-clone handle for every session.

use crate::auth::{Authenticator, Authorization, Authorizer, Credentials};
use crate::directory::{Account, AccountDirectory, OperationRequest};
use crate::error::AuthError;
use std::sync::Arc;

/// Engine-facing handle over the account directory.
#[derive(Debug, Clone)]
pub struct UserManager {
    directory: Arc<AccountDirectory>,
    authenticator: Authenticator,
    authorizer: Authorizer,
}

impl UserManager {
    pub fn new(directory: Arc<AccountDirectory>) -> Self {
        Self {
            authenticator: Authenticator::new(Arc::clone(&directory)),
            authorizer: Authorizer::new(),
            directory,
        }
    }

    pub fn directory(&self) -> &Arc<AccountDirectory> {
        &self.directory
    }

    pub fn get(&self, username: &str) -> Option<Arc<Account>> {
        self.directory.get(username)
    }

    pub fn list(&self) -> Vec<String> {
        self.directory.list()
    }

    pub fn save(&self, account: Account) {
        self.directory.save(account);
    }

    pub fn delete(&self, username: &str) {
        self.directory.delete(username);
    }

    pub fn exists(&self, username: &str) -> bool {
        self.directory.exists(username)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<Arc<Account>, AuthError> {
        self.authenticator.authenticate(username, password)
    }

    pub fn login(&self, credentials: &Credentials) -> Result<Arc<Account>, AuthError> {
        self.authenticator.login(credentials)
    }

    pub fn authorize(&self, account: &Account, request: OperationRequest) -> Authorization {
        self.authorizer.authorize(account, request)
    }
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new(Arc::new(AccountDirectory::new()))
    }
}
