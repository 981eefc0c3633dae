//! Permission grants attached to accounts.

use std::collections::BTreeMap;
use std::fmt;

/// The kind of capability a grant confers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrantKind {
    Write,
    ConcurrentLogin,
    TransferRate,
}

impl GrantKind {
    pub const ALL: [GrantKind; 3] = [
        GrantKind::Write,
        GrantKind::ConcurrentLogin,
        GrantKind::TransferRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::ConcurrentLogin => "concurrent_login",
            Self::TransferRate => "transfer_rate",
        }
    }
}

impl fmt::Display for GrantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable capability held by an account.
///
/// The numeric limits are carried for the transfer engine to enforce;
/// authorization only checks whether a grant of the right kind exists.
/// A limit of `0` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionGrant {
    Write,
    ConcurrentLogin {
        max_logins: u32,
        max_logins_per_ip: u32,
    },
    TransferRate {
        max_download_rate: u64,
        max_upload_rate: u64,
    },
}

impl PermissionGrant {
    pub fn kind(&self) -> GrantKind {
        match self {
            Self::Write => GrantKind::Write,
            Self::ConcurrentLogin { .. } => GrantKind::ConcurrentLogin,
            Self::TransferRate { .. } => GrantKind::TransferRate,
        }
    }
}

/// The grants of one account, at most one per kind.
///
/// Inserting a grant whose kind is already present replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    grants: BTreeMap<GrantKind, PermissionGrant>,
}

impl GrantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a grant, returning the one it replaced (if any).
    pub fn insert(&mut self, grant: PermissionGrant) -> Option<PermissionGrant> {
        self.grants.insert(grant.kind(), grant)
    }

    pub fn get(&self, kind: GrantKind) -> Option<&PermissionGrant> {
        self.grants.get(&kind)
    }

    pub fn contains(&self, kind: GrantKind) -> bool {
        self.grants.contains_key(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PermissionGrant> {
        self.grants.values()
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

impl FromIterator<PermissionGrant> for GrantSet {
    fn from_iter<I: IntoIterator<Item = PermissionGrant>>(iter: I) -> Self {
        let mut set = GrantSet::new();
        for grant in iter {
            set.insert(grant);
        }
        set
    }
}
