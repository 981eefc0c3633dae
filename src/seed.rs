//! Directory initialization from seed accounts.
//!
//! Every seeded account receives the standard grant set: write access
//! (unless the seed turns it off), a concurrent-login grant and a
//! transfer-rate grant, with limits taken from the seed or the defaults.

use crate::config::{AccountDefaults, HomeDirectoryPolicy, SeedAccount};
use crate::directory::{Account, HomeProvisioner, PermissionGrant};
use crate::error::InitError;
use crate::manager::UserManager;
use std::path::Path;
use tracing::{info, warn};

/// Summary of an initialization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Usernames now present in the directory.
    pub seeded: Vec<String>,
    /// Usernames left out because their account could not be built.
    pub skipped: Vec<String>,
}

/// Build the account described by `seed`, filling gaps from `defaults`.
pub fn build_account(
    seed: &SeedAccount,
    defaults: &AccountDefaults,
    home_root: &Path,
    provisioner: &dyn HomeProvisioner,
) -> Result<Account, crate::error::AccountError> {
    let rate = seed.transfer_rate.unwrap_or(defaults.transfer_rate);

    let mut builder = Account::builder(seed.username.clone(), seed.password.clone())
        .enabled(seed.enabled)
        .max_idle_seconds(seed.idle_timeout.unwrap_or(defaults.idle_timeout))
        .grant(PermissionGrant::ConcurrentLogin {
            max_logins: seed.max_logins.unwrap_or(defaults.max_logins),
            max_logins_per_ip: seed.max_logins_per_ip.unwrap_or(defaults.max_logins_per_ip),
        })
        .grant(PermissionGrant::TransferRate {
            max_download_rate: rate,
            max_upload_rate: rate,
        });
    if seed.write {
        builder = builder.grant(PermissionGrant::Write);
    }

    builder.build(home_root, provisioner)
}

/// Populate `manager` from `seeds`.
///
/// With [`HomeDirectoryPolicy::Abort`] the first account that cannot be
/// built stops the run; accounts saved before it stay in the directory.
/// With [`HomeDirectoryPolicy::Skip`] such accounts are logged and left out.
pub fn initialize(
    manager: &UserManager,
    seeds: &[SeedAccount],
    defaults: &AccountDefaults,
    home_root: &Path,
    provisioner: &dyn HomeProvisioner,
    policy: HomeDirectoryPolicy,
) -> Result<SeedReport, InitError> {
    let _span = crate::telemetry::spans::seed(home_root).entered();
    let mut report = SeedReport::default();

    for seed in seeds {
        match build_account(seed, defaults, home_root, provisioner) {
            Ok(account) => {
                info!(
                    username = %account.username(),
                    home = %account.home_directory().display(),
                    enabled = account.enabled(),
                    "Seeded account"
                );
                manager.save(account);
                report.seeded.push(seed.username.clone());
            }
            Err(e) if policy == HomeDirectoryPolicy::Skip => {
                warn!(
                    username = %seed.username,
                    error = %e,
                    code = e.error_code(),
                    "Skipping account"
                );
                report.skipped.push(seed.username.clone());
            }
            Err(source) => {
                return Err(InitError::Account {
                    username: seed.username.clone(),
                    source,
                });
            }
        }
    }

    info!(
        seeded = report.seeded.len(),
        skipped = report.skipped.len(),
        "Account directory initialized"
    );
    Ok(report)
}
