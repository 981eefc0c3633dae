//! ftp-userdir - account directory bootstrap.
//!
//! Loads the configuration, seeds the account directory and holds it until
//! shutdown. The FTP engine embeds the library and shares the same
//! `UserManager`; this binary exists to validate a configuration and its
//! home directories end to end.

use anyhow::Context;
use ftp_userdir::config::{Config, SeedAccount, validate};
use ftp_userdir::{FsProvisioner, UserManager, initialize, telemetry};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ftp-userdir.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s) in {}", errors.len(), config_path);
    }

    info!(
        server = %config.server.name,
        home_root = %config.server.home_root.display(),
        "Starting ftp-userdir"
    );

    let seeds = if config.accounts.is_empty() {
        info!("No accounts configured, seeding built-in accounts");
        SeedAccount::builtin()
    } else {
        config.accounts.clone()
    };

    let manager = UserManager::default();
    let report = initialize(
        &manager,
        &seeds,
        &config.defaults,
        &config.server.home_root,
        &FsProvisioner,
        config.server.on_home_error,
    )
    .with_context(|| format!("initializing accounts under {}", config.server.home_root.display()))?;

    info!(
        accounts = manager.directory().len(),
        skipped = ?report.skipped,
        "Account directory ready"
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    Ok(())
}
