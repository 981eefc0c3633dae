//! Account model and the concurrent account directory.
//!
//! - [`grant`]: permission grants and the per-account grant set
//! - [`credential`]: the zeroizing, constant-time credential wrapper
//! - [`account`]: immutable account records and their builder
//! - [`provision`]: home directory provisioning seam
//! - [`request`]: operation requests checked by the authorizer
//! - [`store`]: the [`AccountDirectory`] itself

mod account;
mod credential;
mod grant;
mod provision;
mod request;
mod store;

pub use account::{Account, AccountBuilder, DEFAULT_MAX_IDLE_SECONDS, validate_username};
pub use credential::Credential;
pub use grant::{GrantKind, GrantSet, PermissionGrant};
pub use provision::{FsProvisioner, HomeProvisioner};
pub use request::{OperationRequest, TransferDirection};
pub use store::AccountDirectory;
