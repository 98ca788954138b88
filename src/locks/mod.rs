//! Advisory locking for the audit log.
//!
//! The log is the one shared mutable resource. Runs are expected to be
//! serialized by the calling workflow; the lock only guards against two
//! overlapping runs interleaving rows in the same file.
//!
//! # Lock Files
//!
//! The lock for `logs/admin.csv` is `logs/admin.csv.lock`, created with
//! **create_new** semantics (exclusive create) so only one process can
//! hold it. It contains JSON metadata (`owner`, `pid`, `created_at`,
//! `action`). A lock older than [`STALE_AFTER_MINUTES`] is assumed to be
//! left over from a crashed run and is taken over; a lock file whose
//! metadata never got written is aged by its modification time instead.
//!
//! # RAII Guards
//!
//! The lock is released when its [`LockGuard`] is dropped. If deletion
//! fails during drop, a warning is logged but the program does not crash.

mod guard;
mod metadata;
mod operations;


// Re-export public API
pub use guard::LockGuard;
pub use metadata::{LockMetadata, owner_string};
pub use operations::{STALE_AFTER_MINUTES, acquire_file_lock, lock_path_for};
