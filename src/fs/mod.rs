//! Filesystem utilities for org-admin.
//!
//! The audit log must never be observed half-written, so new files are
//! produced through a temporary file and a rename.

pub mod atomic;

pub use atomic::atomic_write;
