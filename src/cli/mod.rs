//! CLI argument parsing for org-admin.
//!
//! Uses clap derive macros for declarative argument definitions. Domain
//! flags are kept as raw strings here and validated by
//! [`resolve`](crate::request::resolve), so every input problem is reported
//! the same way. The orchestration lives in the `commands` module.

use crate::request::RawArgs;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// org-admin: one GitHub organization change per run, recorded in an audit log.
///
/// Each invocation performs a single administrative action (teams,
/// repositories, memberships) against the REST API and appends one row
/// to a CSV spreadsheet log.
#[derive(Parser, Debug)]
#[command(name = "org-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to perform (create-team, delete-team, add-repo, remove-repo,
    /// add-user, remove-user, create-repo, user-access, delete-repo,
    /// list-teams, list-repos, list-members).
    #[arg(long)]
    pub action: Option<String>,

    /// Organization login.
    #[arg(long)]
    pub org: Option<String>,

    /// Team name; the slug is derived from it.
    #[arg(long)]
    pub team: Option<String>,

    /// Existing repository name.
    #[arg(long)]
    pub repo: Option<String>,

    /// GitHub username (not an email address).
    #[arg(long)]
    pub user: Option<String>,

    /// Permission level: pull, triage, push, maintain or admin.
    #[arg(long)]
    pub permission: Option<String>,

    /// Name of the repository to create.
    #[arg(long)]
    pub repo_name: Option<String>,

    /// Create the repository as private (`true` or `false`).
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub repo_private: Option<String>,

    /// Audit log path, overriding the config file.
    #[arg(long, env = "ORG_ADMIN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// REST API base URL, overriding the config file.
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Config file path (default: .github/org-admin.yaml if present).
    #[arg(long, env = "ORG_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The domain flags, unvalidated.
    pub fn raw_args(&self) -> RawArgs {
        RawArgs {
            action: self.action.clone(),
            org: self.org.clone(),
            team: self.team.clone(),
            repo: self.repo.clone(),
            user: self.user.clone(),
            permission: self.permission.clone(),
            repo_name: self.repo_name.clone(),
            repo_private: self.repo_private.clone(),
        }
    }
}
