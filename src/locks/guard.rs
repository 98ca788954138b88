//! Lock release on drop.

use std::fs;
use std::path::PathBuf;

/// Holds the log lock until dropped.
///
/// Failing to delete the lock file only logs a warning; a leftover lock is
/// taken over once it goes stale.
#[derive(Debug)]
pub struct LockGuard {
    path: PathBuf,
}

impl LockGuard {
    pub(super) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release lock");
        }
    }
}
