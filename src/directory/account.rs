//! Account records.
//!
//! An [`Account`] is immutable once built. Updating an account means
//! building a new one and saving it over the old entry.

use super::credential::Credential;
use super::grant::{GrantKind, GrantSet, PermissionGrant};
use super::provision::HomeProvisioner;
use crate::error::AccountError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Idle timeout applied when the builder is not given one, in seconds.
pub const DEFAULT_MAX_IDLE_SECONDS: u64 = 60_000;

/// A registered FTP account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: String,
    credential: Credential,
    enabled: bool,
    max_idle_seconds: u64,
    home_root: PathBuf,
    home_directory: PathBuf,
    grants: GrantSet,
}

impl Account {
    /// Start building an account.
    pub fn builder(username: impl Into<String>, credential: impl Into<Credential>) -> AccountBuilder {
        AccountBuilder {
            username: username.into(),
            credential: credential.into(),
            enabled: true,
            max_idle_seconds: DEFAULT_MAX_IDLE_SECONDS,
            grants: GrantSet::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_idle_seconds(&self) -> u64 {
        self.max_idle_seconds
    }

    pub fn home_root(&self) -> &Path {
        &self.home_root
    }

    /// `home_root/username`, guaranteed to have existed when the account was built.
    pub fn home_directory(&self) -> &Path {
        &self.home_directory
    }

    pub fn grants(&self) -> &GrantSet {
        &self.grants
    }

    pub fn grant(&self, kind: GrantKind) -> Option<&PermissionGrant> {
        self.grants.get(kind)
    }

    /// Rebuild this account under a different home root.
    ///
    /// Every other field is carried over unchanged. The new home directory is
    /// provisioned exactly as at first construction.
    pub fn rehome(
        &self,
        new_root: impl Into<PathBuf>,
        provisioner: &dyn HomeProvisioner,
    ) -> Result<Account, AccountError> {
        AccountBuilder {
            username: self.username.clone(),
            credential: self.credential.clone(),
            enabled: self.enabled,
            max_idle_seconds: self.max_idle_seconds,
            grants: self.grants.clone(),
        }
        .build(new_root, provisioner)
    }
}

/// Builder for [`Account`]. Accounts are enabled by default and carry no grants.
#[derive(Debug, Clone)]
pub struct AccountBuilder {
    username: String,
    credential: Credential,
    enabled: bool,
    max_idle_seconds: u64,
    grants: GrantSet,
}

impl AccountBuilder {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn max_idle_seconds(mut self, seconds: u64) -> Self {
        self.max_idle_seconds = seconds;
        self
    }

    pub fn grant(mut self, grant: PermissionGrant) -> Self {
        self.grants.insert(grant);
        self
    }

    pub fn grants(mut self, grants: impl IntoIterator<Item = PermissionGrant>) -> Self {
        for grant in grants {
            self.grants.insert(grant);
        }
        self
    }

    /// Validate the username, provision `home_root/username` and produce the account.
    ///
    /// Fails with [`AccountError::HomeDirectoryUnavailable`] if the home
    /// directory neither exists nor can be created.
    pub fn build(
        self,
        home_root: impl Into<PathBuf>,
        provisioner: &dyn HomeProvisioner,
    ) -> Result<Account, AccountError> {
        validate_username(&self.username)?;

        let home_root = home_root.into();
        let home_directory = home_root.join(&self.username);
        debug!(
            username = %self.username,
            home = %home_directory.display(),
            "provisioning home directory"
        );

        provisioner
            .ensure_home(&home_directory)
            .map_err(|source| AccountError::HomeDirectoryUnavailable {
                path: home_directory.clone(),
                source,
            })?;

        Ok(Account {
            username: self.username,
            credential: self.credential,
            enabled: self.enabled,
            max_idle_seconds: self.max_idle_seconds,
            home_root,
            home_directory,
            grants: self.grants,
        })
    }
}

/// Usernames become a single path component of the home directory.
pub fn validate_username(username: &str) -> Result<(), AccountError> {
    let invalid = username.is_empty()
        || username == "."
        || username == ".."
        || username.contains(['/', '\\', '\0']);
    if invalid {
        return Err(AccountError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::provision::FsProvisioner;
    use std::io;

    struct DenyAll;

    impl HomeProvisioner for DenyAll {
        fn ensure_home(&self, _path: &Path) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    #[test]
    fn test_build_derives_home_directory() {
        let root = tempfile::tempdir().unwrap();
        let account = Account::builder("alice", "pw")
            .grant(PermissionGrant::Write)
            .build(root.path(), &FsProvisioner)
            .unwrap();

        assert_eq!(account.username(), "alice");
        assert_eq!(account.home_directory(), root.path().join("alice"));
        assert!(account.home_directory().is_dir());
        assert!(account.enabled());
        assert_eq!(account.max_idle_seconds(), DEFAULT_MAX_IDLE_SECONDS);
        assert!(account.grant(GrantKind::Write).is_some());
    }

    #[test]
    fn test_build_fails_when_home_cannot_be_created() {
        let err = Account::builder("carol", "pw")
            .build("/tmp/root", &DenyAll)
            .unwrap_err();

        match err {
            AccountError::HomeDirectoryUnavailable { path, source } => {
                assert_eq!(path, PathBuf::from("/tmp/root/carol"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_build_fails_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        std::fs::write(&root, b"file").unwrap();

        let err = Account::builder("carol", "pw")
            .build(&root, &FsProvisioner)
            .unwrap_err();
        assert_eq!(err.error_code(), "home_directory_unavailable");
    }

    #[test]
    fn test_invalid_usernames_rejected() {
        for name in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
            let err = Account::builder(name, "pw")
                .build("/nonexistent", &DenyAll)
                .unwrap_err();
            assert!(matches!(err, AccountError::InvalidUsername(_)), "{name:?}");
        }
    }

    #[test]
    fn test_rehome_keeps_fields() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        let account = Account::builder("alice", "pw")
            .enabled(false)
            .max_idle_seconds(30)
            .grant(PermissionGrant::TransferRate { max_download_rate: 100, max_upload_rate: 50 })
            .build(first.path(), &FsProvisioner)
            .unwrap();

        let moved = account.rehome(second.path(), &FsProvisioner).unwrap();

        assert_eq!(moved.username(), account.username());
        assert_eq!(moved.credential(), account.credential());
        assert_eq!(moved.enabled(), account.enabled());
        assert_eq!(moved.max_idle_seconds(), 30);
        assert_eq!(moved.grants(), account.grants());
        assert_eq!(moved.home_directory(), second.path().join("alice"));
        assert!(moved.home_directory().is_dir());

        // Rehoming leaves the receiver as it was
        assert_eq!(account.home_directory(), first.path().join("alice"));
    }

    #[test]
    fn test_rehome_fails_with_unavailable_root() {
        let root = tempfile::tempdir().unwrap();
        let account = Account::builder("alice", "pw")
            .build(root.path(), &FsProvisioner)
            .unwrap();

        assert!(account.rehome("/tmp/elsewhere", &DenyAll).is_err());
    }
}
