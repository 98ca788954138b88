//! Argument resolver: raw key/value input to a validated [`ActionRequest`].

use super::types::{Action, ActionRequest, Field, Permission};
use crate::error::{AdminError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Organization, repository and user names allowed in API paths.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("Invalid name regex"));

/// Placeholder the CI trigger passes when no permission was chosen.
const NIL_PERMISSION: &str = "nil";

/// Raw, unvalidated input exactly as supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct RawArgs {
    pub action: Option<String>,
    pub org: Option<String>,
    pub team: Option<String>,
    pub repo: Option<String>,
    pub user: Option<String>,
    pub permission: Option<String>,
    pub repo_name: Option<String>,
    pub repo_private: Option<String>,
}

/// Resolve raw input into a validated request.
///
/// # Errors
///
/// Returns `AdminError::InvalidArgument` naming the first offending field:
/// a missing `--action`/`--org`, an unknown value, a value that conflicts
/// with the action, or every required field the action is missing.
pub fn resolve(raw: RawArgs) -> Result<ActionRequest> {
    let action_name =
        present(raw.action).ok_or_else(|| AdminError::invalid("--action", "is required"))?;
    let action: Action = action_name
        .parse()
        .map_err(|e: String| AdminError::invalid("--action", e))?;

    let org = present(raw.org)
        .ok_or_else(|| AdminError::invalid("--org", format!("is required for {}", action)))?;
    validate_name("--org", &org)?;

    let permission = match present(raw.permission) {
        Some(p) if p == NIL_PERMISSION => None,
        Some(p) => Some(
            p.parse::<Permission>()
                .map_err(|e| AdminError::invalid("--permission", e))?,
        ),
        None => None,
    };

    let repo_private = match present(raw.repo_private).as_deref() {
        None | Some("false") => false,
        Some("true") => true,
        Some(other) => {
            return Err(AdminError::invalid(
                "--repo-private",
                format!("expected 'true' or 'false', got '{}'", other),
            ));
        }
    };

    let team = present(raw.team);
    if let Some(team) = &team {
        validate_team_name(team)?;
    }

    let repo = present(raw.repo);
    if let Some(repo) = &repo {
        validate_name("--repo", repo)?;
    }

    let user = present(raw.user);
    if let Some(user) = &user {
        validate_login(user)?;
    }

    let repo_name = present(raw.repo_name);
    if let Some(name) = &repo_name {
        validate_name("--repo-name", name)?;
    }

    let request = ActionRequest {
        action,
        org,
        team,
        repo,
        user,
        permission,
        repo_name,
        repo_private,
    };

    check_conflicts(&request)?;
    check_required(&request)?;

    Ok(request)
}

/// Treat empty and whitespace-only values as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_required(request: &ActionRequest) -> Result<()> {
    let missing: Vec<&str> = request
        .action
        .required_fields()
        .iter()
        .filter(|f| !request.is_present(**f))
        .map(|f| f.flag())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(AdminError::invalid(
        missing.join(", "),
        format!("required for {}", request.action),
    ))
}

fn check_conflicts(request: &ActionRequest) -> Result<()> {
    if request.action == Action::CreateRepo {
        return Ok(());
    }
    if request.repo_private {
        return Err(AdminError::invalid(
            "--repo-private",
            format!("only applies to create-repo, not {}", request.action),
        ));
    }
    if request.repo_name.is_some() {
        return Err(AdminError::invalid(
            Field::RepoName.flag(),
            format!(
                "only applies to create-repo, not {} (use --repo)",
                request.action
            ),
        ));
    }
    Ok(())
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    if value == "." || value == ".." || !NAME_REGEX.is_match(value) {
        return Err(AdminError::invalid(
            field,
            format!(
                "'{}' is not a valid name (letters, digits, '.', '-' and '_' only)",
                value
            ),
        ));
    }
    Ok(())
}

fn validate_login(user: &str) -> Result<()> {
    if user.contains('@') {
        return Err(AdminError::invalid(
            "--user",
            format!(
                "'{}' looks like an email address; give the GitHub username instead",
                user
            ),
        ));
    }
    validate_name("--user", user)
}

/// Team names may contain spaces; they only need to slugify to something.
fn validate_team_name(team: &str) -> Result<()> {
    if team.chars().any(char::is_control) {
        return Err(AdminError::invalid(
            "--team",
            "must not contain control characters",
        ));
    }
    if crate::github::team_slug(team).is_empty() {
        return Err(AdminError::invalid(
            "--team",
            format!("'{}' has no letters or digits", team),
        ));
    }
    Ok(())
}
