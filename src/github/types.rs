//! Response bodies returned by the REST API.
//!
//! Only the fields the tool reports are modelled; the rest are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub privacy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Repository {
    pub fn visibility(&self) -> &'static str {
        if self.private { "private" } else { "public" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub login: String,
}

/// Team or organization membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// `member`/`maintainer` for teams, `member`/`admin` for organizations.
    pub role: String,
    /// `active` or `pending`.
    pub state: String,
}

/// A collaborator's permission on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoPermission {
    /// Legacy level: `admin`, `write`, `read` or `none`.
    pub permission: String,
    /// Fine-grained role such as `maintain` or `triage`, when reported.
    #[serde(default)]
    pub role_name: Option<String>,
}
