//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{AdminError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Config` when the file cannot be read, does not
    /// parse, or holds invalid values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AdminError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config file the user asked for, or the default one if present.
    ///
    /// An explicitly requested file must exist; the default location is
    /// optional and falls back to built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(super::DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    tracing::debug!(path = %default_path.display(), "loading config file");
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AdminError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace file values with those given on the command line.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `api_url` must be an http(s) URL
    /// - `log_file` and `user_agent` must be non-empty
    /// - `timeout_secs` must be positive
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(AdminError::Config(format!(
                "config validation failed: api_url must start with http:// or https:// (found '{}')",
                self.api_url
            )));
        }

        if self.log_file.as_os_str().is_empty() {
            return Err(AdminError::Config(
                "config validation failed: log_file must not be empty".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(AdminError::Config(
                "config validation failed: user_agent must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(AdminError::Config(
                "config validation failed: timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
