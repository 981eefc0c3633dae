//! Per-request authorization against an account's grants.

use crate::directory::{Account, OperationRequest};
use tracing::debug;

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// The account holds the grant; the request is handed back unchanged.
    Granted(OperationRequest),
    Denied,
}

impl Authorization {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// The granted request, if any.
    pub fn into_request(self) -> Option<OperationRequest> {
        match self {
            Self::Granted(request) => Some(request),
            Self::Denied => None,
        }
    }
}

/// Decides whether an account may perform a requested operation.
///
/// Only the presence of a grant of the matching kind is checked. Numeric
/// limits on the grant are left to the transfer engine. Requests without a
/// matching grant kind are denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authorizer;

impl Authorizer {
    pub fn new() -> Self {
        Self
    }

    pub fn authorize(&self, account: &Account, request: OperationRequest) -> Authorization {
        let granted = request
            .required_grant()
            .is_some_and(|kind| account.grants().contains(kind));

        if granted {
            Authorization::Granted(request)
        } else {
            debug!(
                username = %account.username(),
                request = %request.name(),
                "request denied"
            );
            Authorization::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{FsProvisioner, GrantKind, PermissionGrant, TransferDirection};

    fn requests() -> Vec<OperationRequest> {
        vec![
            OperationRequest::Write { path: Some("upload.bin".into()) },
            OperationRequest::ConcurrentLogin { account_sessions: 3, ip_sessions: 1 },
            OperationRequest::TransferRate { direction: TransferDirection::Download },
        ]
    }

    fn grant_for(kind: GrantKind) -> PermissionGrant {
        match kind {
            GrantKind::Write => PermissionGrant::Write,
            GrantKind::ConcurrentLogin => PermissionGrant::ConcurrentLogin { max_logins: 1, max_logins_per_ip: 1 },
            GrantKind::TransferRate => PermissionGrant::TransferRate { max_download_rate: 1, max_upload_rate: 1 },
        }
    }

    #[test]
    fn test_granted_iff_grant_present() {
        let root = tempfile::tempdir().unwrap();

        // Every subset of grant kinds against every known request
        for mask in 0u8..8 {
            let kinds: Vec<GrantKind> = GrantKind::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| *k)
                .collect();
            let account = Account::builder(format!("user{mask}"), "pw")
                .grants(kinds.iter().map(|k| grant_for(*k)))
                .build(root.path(), &FsProvisioner)
                .unwrap();

            for request in requests() {
                let expected = kinds.contains(&request.required_grant().unwrap());
                let outcome = Authorizer.authorize(&account, request.clone());
                assert_eq!(outcome.is_granted(), expected, "mask={mask} request={request:?}");
                if expected {
                    assert_eq!(outcome, Authorization::Granted(request));
                }
            }
        }
    }

    #[test]
    fn test_unknown_request_denied_even_with_all_grants() {
        let root = tempfile::tempdir().unwrap();
        let account = Account::builder("root", "pw")
            .grants(GrantKind::ALL.iter().map(|k| grant_for(*k)))
            .build(root.path(), &FsProvisioner)
            .unwrap();

        let outcome = Authorizer.authorize(&account, OperationRequest::Other { name: "SITE EXEC".into() });
        assert_eq!(outcome, Authorization::Denied);
        assert!(outcome.into_request().is_none());
    }
}
