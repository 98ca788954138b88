//! Enumerated configuration values.

use serde::{Deserialize, Serialize};

/// Visibility given to newly created teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeamPrivacy {
    /// Visible to every member of the organization.
    #[default]
    Closed,
    /// Visible only to organization owners and team members.
    Secret,
}

impl TeamPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamPrivacy::Closed => "closed",
            TeamPrivacy::Secret => "secret",
        }
    }
}
