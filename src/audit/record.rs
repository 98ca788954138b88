//! Audit log record.

use crate::error::AdminError;
use crate::locks::owner_string;
use crate::request::ActionRequest;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names, in file order.
pub const HEADER: [&str; 13] = [
    "Timestamp",
    "Actor",
    "Action",
    "Organization",
    "Team",
    "Repository",
    "User",
    "Permission",
    "Repo Name",
    "Repo Private",
    "Access Level",
    "Outcome",
    "Message",
];

/// Timestamp layout used in the log.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whether the API call succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::Failure => write!(f, "failure"),
        }
    }
}

/// One row of the audit log.
///
/// Field order matches [`HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Actor")]
    pub actor: String,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Organization")]
    pub org: String,
    #[serde(rename = "Team")]
    pub team: Option<String>,
    #[serde(rename = "Repository")]
    pub repo: Option<String>,
    #[serde(rename = "User")]
    pub user: Option<String>,
    #[serde(rename = "Permission")]
    pub permission: Option<String>,
    #[serde(rename = "Repo Name")]
    pub repo_name: Option<String>,
    #[serde(rename = "Repo Private")]
    pub repo_private: bool,
    #[serde(rename = "Access Level")]
    pub access_level: Option<String>,
    #[serde(rename = "Outcome")]
    pub outcome: Outcome,
    #[serde(rename = "Message")]
    pub message: String,
}

impl LogRecord {
    /// Start a record for `request`, stamped with the current local time.
    ///
    /// The outcome defaults to failure until [`succeeded`](Self::succeeded)
    /// is called.
    pub fn for_request(request: &ActionRequest, actor: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            actor: actor.into(),
            action: request.action.to_string(),
            org: request.org.clone(),
            team: request.team.clone(),
            repo: request.repo.clone(),
            user: request.user.clone(),
            permission: request.granted_permission().map(|p| p.to_string()),
            repo_name: request.repo_name.clone(),
            repo_private: request.repo_private,
            access_level: request
                .granted_permission()
                .map(|p| p.description().to_string()),
            outcome: Outcome::Failure,
            message: String::new(),
        }
    }

    /// Mark the record successful.
    ///
    /// An access level reported by the API replaces the requested one.
    pub fn succeeded(mut self, summary: impl Into<String>, access_level: Option<String>) -> Self {
        self.outcome = Outcome::Success;
        self.message = summary.into();
        if access_level.is_some() {
            self.access_level = access_level;
        }
        self
    }

    pub fn failed(mut self, error: &AdminError) -> Self {
        self.outcome = Outcome::Failure;
        self.message = error.to_string();
        self
    }
}

/// Who triggered the run: `GITHUB_ACTOR` in CI, otherwise `user@host`.
pub fn current_actor() -> String {
    actor_from(|name| std::env::var(name).ok())
}

/// [`current_actor`] with an injectable environment lookup.
pub fn actor_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("GITHUB_ACTOR")
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(owner_string)
}
