//! Action, permission and request types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative operations the tool can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Create a team under the organization.
    CreateTeam,
    /// Delete a team.
    DeleteTeam,
    /// Grant a team a permission on a repository.
    AddRepo,
    /// Revoke a team's access to a repository.
    RemoveRepo,
    /// Add a user to a team.
    AddUser,
    /// Remove a user from a team.
    RemoveUser,
    /// Create a repository under the organization.
    CreateRepo,
    /// Report a user's effective access level.
    UserAccess,
    /// Delete a repository.
    DeleteRepo,
    /// List the organization's teams.
    ListTeams,
    /// List the organization's repositories.
    ListRepos,
    /// List the organization's members.
    ListMembers,
}

/// An optional request field, named by its command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Team,
    Repo,
    User,
    Permission,
    RepoName,
}

impl Field {
    pub(crate) fn flag(self) -> &'static str {
        match self {
            Field::Team => "--team",
            Field::Repo => "--repo",
            Field::User => "--user",
            Field::Permission => "--permission",
            Field::RepoName => "--repo-name",
        }
    }
}

impl Action {
    /// Every action, in the order shown in help and error messages.
    pub const ALL: [Action; 12] = [
        Action::CreateTeam,
        Action::DeleteTeam,
        Action::AddRepo,
        Action::RemoveRepo,
        Action::AddUser,
        Action::RemoveUser,
        Action::CreateRepo,
        Action::UserAccess,
        Action::DeleteRepo,
        Action::ListTeams,
        Action::ListRepos,
        Action::ListMembers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateTeam => "create-team",
            Action::DeleteTeam => "delete-team",
            Action::AddRepo => "add-repo",
            Action::RemoveRepo => "remove-repo",
            Action::AddUser => "add-user",
            Action::RemoveUser => "remove-user",
            Action::CreateRepo => "create-repo",
            Action::UserAccess => "user-access",
            Action::DeleteRepo => "delete-repo",
            Action::ListTeams => "list-teams",
            Action::ListRepos => "list-repos",
            Action::ListMembers => "list-members",
        }
    }

    /// Fields that must be present for this action, besides `org`.
    pub(crate) fn required_fields(&self) -> &'static [Field] {
        match self {
            Action::CreateTeam | Action::DeleteTeam => &[Field::Team],
            Action::AddRepo => &[Field::Team, Field::Repo, Field::Permission],
            Action::RemoveRepo => &[Field::Team, Field::Repo],
            Action::AddUser => &[Field::Team, Field::User, Field::Permission],
            Action::RemoveUser => &[Field::Team, Field::User],
            Action::CreateRepo => &[Field::RepoName],
            Action::UserAccess => &[Field::User],
            Action::DeleteRepo => &[Field::Repo],
            Action::ListTeams | Action::ListRepos | Action::ListMembers => &[],
        }
    }

    /// Whether the action changes state on the platform.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Action::UserAccess | Action::ListTeams | Action::ListRepos | Action::ListMembers
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Action::ALL.iter().map(|a| a.as_str()).collect();
                format!("unknown action '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// Repository permission levels, ordered by increasing access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::Pull,
        Permission::Triage,
        Permission::Push,
        Permission::Maintain,
        Permission::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Triage => "triage",
            Permission::Push => "push",
            Permission::Maintain => "maintain",
            Permission::Admin => "admin",
        }
    }

    /// Human-readable description of what this level allows.
    pub fn description(&self) -> &'static str {
        match self {
            Permission::Admin => {
                "Full Access - Admin (Create, Read, Update, Delete, Manage Settings)"
            }
            Permission::Maintain => {
                "Maintain Access (Create, Read, Update, Delete, Manage Issues/PRs)"
            }
            Permission::Push => "Write Access (Create, Read, Update, Delete Code)",
            Permission::Triage => "Triage Access (Read, Manage Issues/PRs)",
            Permission::Pull => "Read Access (Clone, Pull, View)",
        }
    }

    /// Team membership role granted for this level.
    ///
    /// Maintain and admin make the user a team maintainer.
    pub fn team_role(&self) -> &'static str {
        if *self >= Permission::Maintain {
            "maintainer"
        } else {
            "member"
        }
    }

    /// Map a permission name reported by the API onto a level.
    ///
    /// The collaborator endpoints report `read`/`write` where the team
    /// endpoints use `pull`/`push`.
    pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
            "read" => Some(Permission::Pull),
            "write" => Some(Permission::Push),
            other => other.parse().ok(),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Permission::ALL.iter().map(|p| p.as_str()).collect();
                format!(
                    "unknown permission '{}', expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// A validated request for exactly one administrative action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: Action,
    pub org: String,
    pub team: Option<String>,
    pub repo: Option<String>,
    pub user: Option<String>,
    pub permission: Option<Permission>,
    pub repo_name: Option<String>,
    pub repo_private: bool,
}

impl ActionRequest {
    /// A request with only the action and organization set.
    #[cfg(test)]
    pub fn new(action: Action, org: impl Into<String>) -> Self {
        Self {
            action,
            org: org.into(),
            team: None,
            repo: None,
            user: None,
            permission: None,
            repo_name: None,
            repo_private: false,
        }
    }

    /// Team name, for actions whose resolution guaranteed one.
    pub(crate) fn team_name(&self) -> &str {
        self.team.as_deref().unwrap_or_default()
    }

    /// The permission, if this action acts on one.
    ///
    /// A `--permission` passed to an action that ignores it is dropped.
    pub fn granted_permission(&self) -> Option<Permission> {
        self.permission
            .filter(|_| self.action.required_fields().contains(&Field::Permission))
    }

    pub(crate) fn repo_slug(&self) -> &str {
        self.repo.as_deref().unwrap_or_default()
    }

    pub(crate) fn user_login(&self) -> &str {
        self.user.as_deref().unwrap_or_default()
    }

    pub(crate) fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Team => self.team.is_some(),
            Field::Repo => self.repo.is_some(),
            Field::User => self.user.is_some(),
            Field::Permission => self.permission.is_some(),
            Field::RepoName => self.repo_name.is_some(),
        }
    }
}
