//! ftp-userdir - user directory and authorization engine for FTP servers.
//!
//! The crate keeps an in-memory [`AccountDirectory`], authenticates login
//! credentials against it and answers per-operation authorization queries
//! (write, concurrent login, transfer rate). The FTP protocol engine is an
//! external collaborator: it hands us credentials and requests and consumes
//! the answers through [`UserManager`].
//!
//! ```no_run
//! use ftp_userdir::{
//!     Account, FsProvisioner, OperationRequest, PermissionGrant, UserManager,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = UserManager::default();
//! manager.save(
//!     Account::builder("alice", "pw")
//!         .grant(PermissionGrant::ConcurrentLogin { max_logins: 2, max_logins_per_ip: 1 })
//!         .build("/srv/ftp", &FsProvisioner)?,
//! );
//!
//! let alice = manager.authenticate("alice", "pw")?;
//! assert!(!manager.authorize(&alice, OperationRequest::Write { path: None }).is_granted());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod manager;
pub mod seed;
pub mod telemetry;

pub use auth::{Authenticator, Authorization, Authorizer, Credentials};
pub use directory::{
    Account, AccountBuilder, AccountDirectory, Credential, FsProvisioner, GrantKind, GrantSet,
    HomeProvisioner, OperationRequest, PermissionGrant, TransferDirection,
};
pub use error::{AccountError, AuthError, InitError};
pub use manager::UserManager;
pub use seed::{SeedReport, initialize};
