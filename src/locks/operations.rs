//! Lock acquisition.

use super::guard::LockGuard;
use super::metadata::LockMetadata;
use crate::error::{AdminError, Result};
use chrono::Duration;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Minutes after which a leftover lock is taken over.
pub const STALE_AFTER_MINUTES: u32 = 30;

/// Lock file guarding `target`: the same path with `.lock` appended.
pub fn lock_path_for(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".lock");
    PathBuf::from(name)
}

/// Acquire the lock guarding `target`.
///
/// A lock older than [`STALE_AFTER_MINUTES`] is removed and acquisition
/// retried once. Its age comes from its metadata, or from the file's
/// modification time when the metadata cannot be read.
///
/// # Errors
///
/// Returns `AdminError::LogWrite` naming the holder if another process
/// holds a fresh lock, or if the lock file cannot be written.
pub fn acquire_file_lock(target: &Path, action: &str) -> Result<LockGuard> {
    let lock_path = lock_path_for(target);
    let metadata = LockMetadata::new(action);

    match try_acquire(&lock_path, &metadata) {
        Err(contention) if contention.is_stale() => {
            tracing::warn!(
                lock = %lock_path.display(),
                holder = %contention.holder(),
                "taking over stale lock"
            );
            fs::remove_file(&lock_path).map_err(|e| {
                AdminError::log_write(format!(
                    "failed to remove stale lock '{}': {}",
                    lock_path.display(),
                    e
                ))
            })?;
            try_acquire(&lock_path, &metadata).map_err(|c| c.into_error(&lock_path))
        }
        other => other.map_err(|c| c.into_error(&lock_path)),
    }
}

/// Why a lock could not be created.
enum Contention {
    /// Another process holds it.
    Held(LockMetadata),
    /// The lock file exists without readable metadata, e.g. left by a run
    /// that died mid-write. `age` is taken from its modification time.
    Unreadable { age: Option<Duration> },
    Failed(AdminError),
}

impl Contention {
    fn age(&self) -> Option<Duration> {
        match self {
            Contention::Held(meta) => Some(meta.age()),
            Contention::Unreadable { age } => *age,
            Contention::Failed(_) => None,
        }
    }

    fn is_stale(&self) -> bool {
        self.age()
            .is_some_and(|age| age > Duration::minutes(i64::from(STALE_AFTER_MINUTES)))
    }

    fn holder(&self) -> String {
        let age = self
            .age()
            .map(|a| format!("{}m", a.num_minutes()))
            .unwrap_or_else(|| "unknown time".to_string());
        match self {
            Contention::Held(meta) => format!(
                "{} (pid {}, {} ago, action {})",
                meta.owner, meta.pid, age, meta.action
            ),
            _ => format!("unknown holder ({} ago)", age),
        }
    }

    fn into_error(self, lock_path: &Path) -> AdminError {
        match self {
            Contention::Failed(err) => err,
            held => AdminError::log_write(format!(
                "log is locked by another run\nLock: {}\nHolder: {}",
                lock_path.display(),
                held.holder()
            )),
        }
    }
}

/// Age of a file according to its modification time.
fn modified_age(path: &Path) -> Option<Duration> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let elapsed = SystemTime::now().duration_since(modified).ok()?;
    Duration::from_std(elapsed).ok()
}

fn try_acquire(
    lock_path: &Path,
    metadata: &LockMetadata,
) -> std::result::Result<LockGuard, Contention> {
    if let Some(parent) = lock_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            Contention::Failed(AdminError::log_write(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            )))
        })?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(lock_path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                match LockMetadata::from_file(lock_path) {
                    Ok(meta) => Contention::Held(meta),
                    Err(_) => Contention::Unreadable {
                        age: modified_age(lock_path),
                    },
                }
            } else {
                Contention::Failed(AdminError::log_write(format!(
                    "failed to acquire lock '{}': {}",
                    lock_path.display(),
                    e
                )))
            }
        })?;

    let json = metadata.to_json().map_err(Contention::Failed)?;
    file.write_all(json.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(lock_path);
        Contention::Failed(AdminError::log_write(format!(
            "failed to write lock metadata: {}",
            e
        )))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(lock_path);
        Contention::Failed(AdminError::log_write(format!(
            "failed to sync lock file: {}",
            e
        )))
    })?;

    Ok(LockGuard::new(lock_path.to_path_buf()))
}
