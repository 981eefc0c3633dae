//! Integration test common infrastructure.
//!
//! Provides a temporary home root, a seeded `UserManager` and a provisioner
//! that can be told to fail.

#![allow(dead_code)]

use ftp_userdir::{Account, FsProvisioner, HomeProvisioner, PermissionGrant, UserManager};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tempfile::TempDir;

/// A manager plus the temporary directory its homes live in.
pub struct TestDirectory {
    pub manager: UserManager,
    pub root: TempDir,
}

impl TestDirectory {
    /// Directory holding `alice` (password `pw`, enabled, concurrent-login
    /// grant only).
    pub fn with_alice() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp root");
        let manager = UserManager::default();
        manager.save(
            Account::builder("alice", "pw")
                .grant(PermissionGrant::ConcurrentLogin {
                    max_logins: 10,
                    max_logins_per_ip: 10,
                })
                .build(root.path(), &FsProvisioner)
                .expect("Failed to build alice"),
        );
        Self { manager, root }
    }

    pub fn account(&self, name: &str, password: &str) -> Account {
        Account::builder(name, password)
            .build(self.root.path(), &FsProvisioner)
            .expect("Failed to build account")
    }
}

/// Provisioner that refuses selected usernames with `PermissionDenied`.
#[derive(Default)]
pub struct RefusingProvisioner {
    refused: HashSet<String>,
}

impl RefusingProvisioner {
    pub fn refusing(names: &[&str]) -> Self {
        Self {
            refused: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl HomeProvisioner for RefusingProvisioner {
    fn ensure_home(&self, path: &Path) -> io::Result<()> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        if self.refused.contains(&name) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        FsProvisioner.ensure_home(path)
    }
}
