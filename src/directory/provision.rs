//! Home directory provisioning.
//!
//! Creating a home directory is the only filesystem side effect in the
//! core. It sits behind [`HomeProvisioner`] so the transfer engine (or a
//! test) can decide what "create" means.

use std::io;
use std::path::Path;
use tracing::debug;

/// Ensures that an account home directory exists.
pub trait HomeProvisioner: Send + Sync {
    /// Make sure `path` exists as a directory, creating parents as needed.
    fn ensure_home(&self, path: &Path) -> io::Result<()>;
}

/// Provisioner backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProvisioner;

impl HomeProvisioner for FsProvisioner {
    fn ensure_home(&self, path: &Path) -> io::Result<()> {
        if path.is_dir() {
            return Ok(());
        }
        // Fails if something other than a directory is already at `path`
        debug!(path = %path.display(), "creating home directory");
        std::fs::create_dir_all(path)
    }
}
