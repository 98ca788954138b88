//! GitHub organization API.
//!
//! [`OrgApi`] is the narrow surface the dispatcher depends on: one method per
//! REST call, each issuing exactly one request. [`GitHubClient`] implements it
//! over blocking HTTP; tests substitute a recording fake.

mod client;
mod slug;
mod status;
mod types;

#[cfg(test)]
mod tests;

use crate::config::TeamPrivacy;
use crate::error::Result;
use crate::request::Permission;

// Re-export public API
pub use client::GitHubClient;
pub use slug::team_slug;
pub use types::{Member, Membership, RepoPermission, Repository, Team};

/// Organization, team, repository and membership operations.
///
/// Every method maps to a single REST request; none of them retries.
pub trait OrgApi {
    fn create_team(&self, org: &str, name: &str, privacy: TeamPrivacy) -> Result<Team>;

    fn delete_team(&self, org: &str, team_slug: &str) -> Result<()>;

    fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        repo: &str,
        permission: Permission,
    ) -> Result<()>;

    fn remove_team_repo(&self, org: &str, team_slug: &str, repo: &str) -> Result<()>;

    /// Add or update a team membership with `role` (`member` or `maintainer`).
    fn set_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        user: &str,
        role: &str,
    ) -> Result<Membership>;

    fn remove_team_membership(&self, org: &str, team_slug: &str, user: &str) -> Result<()>;

    fn create_repo(&self, org: &str, name: &str, private: bool) -> Result<Repository>;

    fn delete_repo(&self, org: &str, repo: &str) -> Result<()>;

    /// A user's effective permission on one repository.
    fn repo_permission(&self, org: &str, repo: &str, user: &str) -> Result<RepoPermission>;

    /// A user's membership of the organization itself.
    fn org_membership(&self, org: &str, user: &str) -> Result<Membership>;

    fn list_teams(&self, org: &str) -> Result<Vec<Team>>;

    fn list_repos(&self, org: &str) -> Result<Vec<Repository>>;

    fn list_members(&self, org: &str) -> Result<Vec<Member>>;
}
