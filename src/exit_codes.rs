//! Exit code constants for the org-admin CLI.
//!
//! Every failure category gets its own code so the calling workflow can
//! tell a rejected input apart from a change that was applied but not logged:
//! - 0: Success
//! - 1: Invalid argument
//! - 2: Configuration error
//! - 3: Authentication failure
//! - 4: Resource not found
//! - 5: Request rejected by the API
//! - 6: Rate limited
//! - 7: Other API or transport failure
//! - 8: Audit log write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Missing, malformed, or conflicting command-line input.
pub const INVALID_ARGUMENT: i32 = 1;

/// Unreadable or invalid configuration file.
pub const CONFIG_ERROR: i32 = 2;

/// Missing, bad, or expired token.
pub const AUTHENTICATION_FAILURE: i32 = 3;

/// Organization, team, repository, or user does not exist.
pub const NOT_FOUND: i32 = 4;

/// The API refused the requested change.
pub const PERMISSION_CONFLICT: i32 = 5;

/// The API is throttling this token.
pub const RATE_LIMITED: i32 = 6;

/// Unexpected API status or a transport failure.
pub const API_FAILURE: i32 = 7;

/// The audit log could not be written.
pub const LOG_WRITE_FAILURE: i32 = 8;
