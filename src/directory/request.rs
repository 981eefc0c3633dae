//! Operation requests raised by the transfer engine during a session.

use super::grant::GrantKind;
use std::path::PathBuf;

/// Direction of a data transfer, from the server's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    Download,
    Upload,
}

/// A request to perform one privileged action.
///
/// The context fields are informational; authorization only looks at the
/// request kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    /// Create, modify or delete a file (`path` relative to the home directory).
    Write { path: Option<PathBuf> },
    /// Open one more session for this account.
    ConcurrentLogin {
        account_sessions: u32,
        ip_sessions: u32,
    },
    /// Move data at a rate limited by the account's transfer grant.
    TransferRate { direction: TransferDirection },
    /// Any engine request this directory has no grant kind for.
    Other { name: String },
}

impl OperationRequest {
    /// The grant kind that covers this request, if any.
    pub fn required_grant(&self) -> Option<GrantKind> {
        match self {
            Self::Write { .. } => Some(GrantKind::Write),
            Self::ConcurrentLogin { .. } => Some(GrantKind::ConcurrentLogin),
            Self::TransferRate { .. } => Some(GrantKind::TransferRate),
            Self::Other { .. } => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Write { .. } => "write",
            Self::ConcurrentLogin { .. } => "concurrent_login",
            Self::TransferRate { .. } => "transfer_rate",
            Self::Other { name } => name,
        }
    }
}
