//! Contents of a lock file.

use crate::error::{AdminError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Who holds the log lock, since when, and for which action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockMetadata {
    /// `user@host` of the holding process.
    pub owner: String,
    pub pid: u32,
    pub created_at: DateTime<Utc>,
    pub action: String,
}

impl LockMetadata {
    pub fn new(action: &str) -> Self {
        Self {
            owner: owner_string(),
            pid: std::process::id(),
            created_at: Utc::now(),
            action: action.to_string(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AdminError::log_write(format!("failed to read lock '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AdminError::log_write(format!("failed to parse lock '{}': {}", path.display(), e))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AdminError::log_write(format!("failed to encode lock metadata: {}", e)))
    }

    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.created_at)
    }
}

/// `user@host` of the current process.
pub fn owner_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}
