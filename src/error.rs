//! Error types for the org-admin CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for org-admin operations.
///
/// Each variant maps to its own exit code. None of them is retried.
#[derive(Error, Debug)]
pub enum AdminError {
    /// A required field is missing, or a value is malformed or conflicting.
    #[error("invalid argument {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// The configuration file could not be read or holds invalid values.
    #[error("configuration error: {0}")]
    Config(String),

    /// The token is missing, bad, or expired.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The organization, team, repository, or user does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The API understood the request but refused the change.
    #[error("request rejected: {0}")]
    PermissionConflict(String),

    /// The API is throttling this token.
    #[error("rate limited: {message}{}", reset_hint(.reset_at))]
    RateLimit {
        message: String,
        reset_at: Option<i64>,
    },

    /// Any other non-success status, or the request never completed.
    #[error("API request failed: {0}")]
    Api(String),

    /// The audit log could not be written.
    ///
    /// `applied` records whether the API change had already taken place.
    #[error("{}", log_write_message(.action, .applied, .reason))]
    LogWrite {
        action: String,
        applied: bool,
        reason: String,
    },
}

impl AdminError {
    /// Build an `InvalidArgument` error for the named field.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AdminError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Build a `LogWrite` error that has not yet been tied to an action.
    pub fn log_write(reason: impl Into<String>) -> Self {
        AdminError::LogWrite {
            action: String::new(),
            applied: false,
            reason: reason.into(),
        }
    }

    /// Attach the action and whether its side effect already happened.
    ///
    /// Errors other than `LogWrite` are returned unchanged.
    pub fn after_action(self, action: &str, applied: bool) -> Self {
        match self {
            AdminError::LogWrite { reason, .. } => AdminError::LogWrite {
                action: action.to_string(),
                applied,
                reason,
            },
            other => other,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AdminError::InvalidArgument { .. } => exit_codes::INVALID_ARGUMENT,
            AdminError::Config(_) => exit_codes::CONFIG_ERROR,
            AdminError::Authentication(_) => exit_codes::AUTHENTICATION_FAILURE,
            AdminError::NotFound(_) => exit_codes::NOT_FOUND,
            AdminError::PermissionConflict(_) => exit_codes::PERMISSION_CONFLICT,
            AdminError::RateLimit { .. } => exit_codes::RATE_LIMITED,
            AdminError::Api(_) => exit_codes::API_FAILURE,
            AdminError::LogWrite { .. } => exit_codes::LOG_WRITE_FAILURE,
        }
    }

    /// Whether this error came back from the hosting platform.
    pub fn is_api_failure(&self) -> bool {
        matches!(
            self,
            AdminError::Authentication(_)
                | AdminError::NotFound(_)
                | AdminError::PermissionConflict(_)
                | AdminError::RateLimit { .. }
                | AdminError::Api(_)
        )
    }
}

fn reset_hint(reset_at: &Option<i64>) -> String {
    let Some(epoch) = reset_at else {
        return String::new();
    };
    match chrono::DateTime::from_timestamp(*epoch, 0) {
        Some(at) => format!(" (limit resets at {})", at.to_rfc3339()),
        None => String::new(),
    }
}

fn log_write_message(action: &str, applied: &bool, reason: &str) -> String {
    if *applied {
        format!(
            "action '{}' was applied, but the audit log could not be written: {}",
            action, reason
        )
    } else if action.is_empty() {
        format!("audit log could not be written: {}", reason)
    } else {
        format!(
            "audit log could not be written for action '{}': {}",
            action, reason
        )
    }
}

/// Result type alias for org-admin operations.
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_the_field() {
        let err = AdminError::invalid("--team", "required for create-team");
        assert_eq!(err.exit_code(), exit_codes::INVALID_ARGUMENT);
        assert_eq!(
            err.to_string(),
            "invalid argument --team: required for create-team"
        );
    }

    #[test]
    fn api_errors_have_distinct_exit_codes() {
        assert_eq!(
            AdminError::Authentication("bad token".into()).exit_code(),
            exit_codes::AUTHENTICATION_FAILURE
        );
        assert_eq!(
            AdminError::NotFound("team".into()).exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            AdminError::PermissionConflict("nope".into()).exit_code(),
            exit_codes::PERMISSION_CONFLICT
        );
        assert_eq!(
            AdminError::RateLimit {
                message: "slow down".into(),
                reset_at: None
            }
            .exit_code(),
            exit_codes::RATE_LIMITED
        );
        assert_eq!(AdminError::Api("500".into()).exit_code(), exit_codes::API_FAILURE);
    }

    #[test]
    fn rate_limit_message_includes_reset_time() {
        let err = AdminError::RateLimit {
            message: "API rate limit exceeded".into(),
            reset_at: Some(0),
        };
        assert_eq!(
            err.to_string(),
            "rate limited: API rate limit exceeded (limit resets at 1970-01-01T00:00:00+00:00)"
        );
    }

    #[test]
    fn log_write_after_applied_action_says_so() {
        let err = AdminError::log_write("disk full").after_action("create-team", true);
        assert_eq!(err.exit_code(), exit_codes::LOG_WRITE_FAILURE);
        assert_eq!(
            err.to_string(),
            "action 'create-team' was applied, but the audit log could not be written: disk full"
        );
    }

    #[test]
    fn log_write_after_failed_action_does_not_claim_success() {
        let err = AdminError::log_write("read-only").after_action("delete-team", false);
        assert!(!err.to_string().contains("was applied"));
        assert!(err.to_string().contains("delete-team"));
    }

    #[test]
    fn after_action_leaves_other_errors_alone() {
        let err = AdminError::NotFound("team".into()).after_action("delete-team", false);
        assert!(matches!(err, AdminError::NotFound(_)));
    }

    #[test]
    fn api_failure_classification() {
        assert!(AdminError::NotFound("x".into()).is_api_failure());
        assert!(!AdminError::invalid("--org", "required").is_api_failure());
        assert!(!AdminError::log_write("x").is_api_failure());
        assert!(!AdminError::Config("x".into()).is_api_failure());
    }
}
