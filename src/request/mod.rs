//! Action requests and the argument resolver.
//!
//! An [`ActionRequest`] is built once per invocation from raw key/value
//! input and discarded after dispatch. Resolution is pure: it never touches
//! the network or the filesystem, so a rejected request issues no API call
//! and leaves no trace in the audit log.

mod resolve;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use resolve::{RawArgs, resolve};
pub use types::{Action, ActionRequest, Permission};
