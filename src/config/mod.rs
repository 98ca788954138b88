//! Configuration for org-admin.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags (and their environment variables), the optional YAML file at
//! `.github/org-admin.yaml`, and built-in defaults. The access token is kept
//! apart from the rest so it can never end up in a serialized config or a
//! debug dump.

mod model;
mod operations;
mod token;
pub mod types;


// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_PATH};
pub use token::Token;
pub use types::TeamPrivacy;
