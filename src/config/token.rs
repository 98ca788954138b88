//! Access token handling.

use crate::error::{AdminError, Result};
use std::fmt;

/// Environment variables checked for the token, in order.
pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "TOKEN"];

/// API access token. Its value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    #[cfg(test)]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read the token from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the token through `lookup`, trying each of [`TOKEN_VARS`].
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Authentication` if no variable holds a
    /// non-empty value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        TOKEN_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(Self)
            .ok_or_else(|| {
                AdminError::Authentication(format!(
                    "{} environment variable is not set",
                    TOKEN_VARS.join(" (or ") + ")"
                ))
            })
    }

    /// The raw secret, for building the Authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}
