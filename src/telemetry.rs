//! Logging setup and standard spans.

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Set
/// `FTP_USERDIR_LOG_JSON=1` for JSON output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if std::env::var("FTP_USERDIR_LOG_JSON").is_ok() {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Standardized span constructors.
pub mod spans {
    use std::net::IpAddr;
    use std::path::Path;
    use tracing::{Span, info_span};

    /// Create a span for one client session, entered by the transfer engine.
    pub fn session(username: &str, ip: Option<IpAddr>) -> Span {
        if let Some(ip) = ip {
            info_span!("session", username = %username, ip = %ip)
        } else {
            info_span!("session", username = %username)
        }
    }

    /// Create a span for directory seeding.
    pub fn seed(home_root: &Path) -> Span {
        info_span!("seed", home_root = %home_root.display())
    }
}
