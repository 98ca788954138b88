//! Config struct definition and default implementation.

use super::types::TeamPrivacy;
use serde::Deserialize;
use std::path::PathBuf;

/// Config file read when `--config` is not given. Skipped if absent.
pub const DEFAULT_CONFIG_PATH: &str = ".github/org-admin.yaml";

/// Configuration for org-admin.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path of the audit log, relative to the working directory.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Privacy of teams created by `create-team`.
    #[serde(default)]
    pub team_privacy: TeamPrivacy,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs/github_admin_log.csv")
}

fn default_user_agent() -> String {
    format!("org-admin/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_file: default_log_file(),
            team_privacy: TeamPrivacy::default(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
