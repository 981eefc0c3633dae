//! The account directory.
//!
//! [`AccountDirectory`] is the only shared mutable state in the crate. It is
//! backed by a `DashMap`, so every operation can be called concurrently from
//! any number of sessions without outside locking.

use super::account::Account;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Concurrent registry of accounts keyed by username.
///
/// Lookups hand out `Arc<Account>` snapshots and drop the shard guard before
/// returning. A session that keeps a snapshot does not observe later saves or
/// deletes of the same username.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: DashMap<String, Arc<Account>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an account by username.
    pub fn get(&self, username: &str) -> Option<Arc<Account>> {
        self.accounts.get(username).map(|r| Arc::clone(r.value()))
    }

    /// Snapshot of all usernames, in no particular order.
    pub fn list(&self) -> Vec<String> {
        self.accounts.iter().map(|e| e.key().clone()).collect()
    }

    /// Insert or replace the entry for `account.username()`.
    ///
    /// Returns the account that was replaced, if any. Last write wins.
    pub fn save(&self, account: Account) -> Option<Arc<Account>> {
        let username = account.username().to_string();
        let previous = self.accounts.insert(username.clone(), Arc::new(account));
        debug!(username = %username, replaced = previous.is_some(), "account saved");
        previous
    }

    /// Remove an account. Deleting an absent username is not an error.
    pub fn delete(&self, username: &str) -> Option<Arc<Account>> {
        let removed = self.accounts.remove(username).map(|(_, account)| account);
        if removed.is_some() {
            debug!(username = %username, "account deleted");
        }
        removed
    }

    pub fn exists(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
