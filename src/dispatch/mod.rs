//! Action dispatcher.
//!
//! Maps a validated [`ActionRequest`] onto exactly one [`OrgApi`] call and
//! turns the response into a [`Report`] for the operator. Nothing is
//! retried: a failed call is returned as-is and the run ends there.

mod report;


use crate::config::TeamPrivacy;
use crate::error::{AdminError, Result};
use crate::github::{OrgApi, team_slug};
use crate::request::{Action, ActionRequest, Permission};

pub use report::Report;

/// Dispatches requests against one API implementation.
pub struct Dispatcher<'a, A: OrgApi> {
    api: &'a A,
    team_privacy: TeamPrivacy,
}

impl<'a, A: OrgApi> Dispatcher<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            team_privacy: TeamPrivacy::default(),
        }
    }

    /// Privacy given to teams created by `create-team`.
    pub fn with_team_privacy(mut self, privacy: TeamPrivacy) -> Self {
        self.team_privacy = privacy;
        self
    }

    /// Perform the single API call for `request`.
    ///
    /// # Errors
    ///
    /// Returns whatever the API call returned: authentication, not-found,
    /// conflict, rate-limit or transport errors.
    pub fn dispatch(&self, request: &ActionRequest) -> Result<Report> {
        let org = request.org.as_str();
        tracing::info!(action = %request.action, org, "dispatching");

        match request.action {
            Action::CreateTeam => {
                let team = self
                    .api
                    .create_team(org, request.team_name(), self.team_privacy)?;
                Ok(Report::new(format!(
                    "Created team '{}' (slug '{}') in '{}'",
                    team.name, team.slug, org
                )))
            }
            Action::DeleteTeam => {
                let slug = team_slug(request.team_name());
                self.api.delete_team(org, &slug)?;
                Ok(Report::new(format!("Deleted team '{}' in '{}'", slug, org)))
            }
            Action::AddRepo => {
                let slug = team_slug(request.team_name());
                let permission = required_permission(request)?;
                self.api
                    .set_team_repo_permission(org, &slug, request.repo_slug(), permission)?;
                Ok(Report::new(format!(
                    "Granted team '{}' {} permission on repo '{}/{}'",
                    slug,
                    permission,
                    org,
                    request.repo_slug()
                ))
                .with_access_level(permission.description()))
            }
            Action::RemoveRepo => {
                let slug = team_slug(request.team_name());
                self.api.remove_team_repo(org, &slug, request.repo_slug())?;
                Ok(Report::new(format!(
                    "Removed team '{}' from repo '{}/{}'",
                    slug,
                    org,
                    request.repo_slug()
                )))
            }
            Action::AddUser => {
                let slug = team_slug(request.team_name());
                let permission = required_permission(request)?;
                let membership = self.api.set_team_membership(
                    org,
                    &slug,
                    request.user_login(),
                    permission.team_role(),
                )?;
                Ok(Report::new(format!(
                    "Added user '{}' to team '{}' in '{}' as {} ({})",
                    request.user_login(),
                    slug,
                    org,
                    membership.role,
                    membership.state
                ))
                .with_access_level(permission.description()))
            }
            Action::RemoveUser => {
                let slug = team_slug(request.team_name());
                self.api
                    .remove_team_membership(org, &slug, request.user_login())?;
                Ok(Report::new(format!(
                    "Removed user '{}' from team '{}' in '{}'",
                    request.user_login(),
                    slug,
                    org
                )))
            }
            Action::CreateRepo => {
                let name = request.repo_name.as_deref().unwrap_or_default();
                let repo = self.api.create_repo(org, name, request.repo_private)?;
                let mut report = Report::new(format!(
                    "Created {} repo '{}' in '{}'",
                    repo.visibility(),
                    repo.name,
                    org
                ));
                if let Some(url) = repo.html_url {
                    report = report.with_line(url);
                }
                Ok(report)
            }
            Action::UserAccess => self.user_access(request),
            Action::DeleteRepo => {
                self.api.delete_repo(org, request.repo_slug())?;
                Ok(Report::new(format!(
                    "Deleted repo '{}/{}'",
                    org,
                    request.repo_slug()
                )))
            }
            Action::ListTeams => {
                let teams = self.api.list_teams(org)?;
                Ok(Report::listing(
                    format!("{} teams in '{}'", teams.len(), org),
                    teams.iter().map(|t| format!("{} (slug: {})", t.name, t.slug)),
                ))
            }
            Action::ListRepos => {
                let repos = self.api.list_repos(org)?;
                Ok(Report::listing(
                    format!("{} repositories in '{}'", repos.len(), org),
                    repos.iter().map(|r| format!("{} ({})", r.name, r.visibility())),
                ))
            }
            Action::ListMembers => {
                let members = self.api.list_members(org)?;
                Ok(Report::listing(
                    format!("{} members in '{}'", members.len(), org),
                    members.iter().map(|m| m.login.clone()),
                ))
            }
        }
    }

    /// Repository permission when a repo is named, else organization role.
    fn user_access(&self, request: &ActionRequest) -> Result<Report> {
        let org = request.org.as_str();
        let user = request.user_login();

        match request.repo.as_deref() {
            Some(repo) => {
                let reported = self.api.repo_permission(org, repo, user)?;
                let level = reported
                    .role_name
                    .as_deref()
                    .and_then(Permission::from_api_name)
                    .or_else(|| Permission::from_api_name(&reported.permission));
                let (name, description) = match level {
                    Some(p) => (p.as_str().to_string(), p.description().to_string()),
                    None => (reported.permission.clone(), no_access(&reported.permission)),
                };
                Ok(Report::new(format!(
                    "User '{}' has {} access to repo '{}/{}'",
                    user, name, org, repo
                ))
                .with_access_level(description))
            }
            None => {
                let membership = self.api.org_membership(org, user)?;
                let description = match membership.role.as_str() {
                    "admin" => "Organization Owner".to_string(),
                    "member" => "Organization Member".to_string(),
                    other => format!("Unknown Access Level ({})", other),
                };
                Ok(Report::new(format!(
                    "User '{}' is {} of '{}' ({})",
                    user,
                    if membership.role == "admin" { "an owner" } else { "a member" },
                    org,
                    membership.state
                ))
                .with_access_level(description))
            }
        }
    }
}

fn no_access(permission: &str) -> String {
    if permission == "none" {
        "No Access".to_string()
    } else {
        format!("Unknown Access Level ({})", permission)
    }
}

/// Resolution guarantees a permission for add-repo and add-user.
fn required_permission(request: &ActionRequest) -> Result<Permission> {
    request.permission.ok_or_else(|| {
        AdminError::invalid("--permission", format!("required for {}", request.action))
    })
}
