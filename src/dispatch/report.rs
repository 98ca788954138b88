//! Human-readable result of a dispatched action.

use std::fmt;

/// What the operator sees after a successful action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// One-line summary, also written to the audit log.
    pub summary: String,
    /// Access level the action granted or found, if any.
    pub access_level: Option<String>,
    /// Detail lines such as list entries.
    pub lines: Vec<String>,
}

impl Report {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn listing<I>(summary: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            summary: summary.into(),
            access_level: None,
            lines: lines.into_iter().collect(),
        }
    }

    pub fn with_access_level(mut self, level: impl Into<String>) -> Self {
        self.access_level = Some(level.into());
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(level) = &self.access_level {
            write!(f, "\n  Access: {}", level)?;
        }
        for line in &self.lines {
            write!(f, "\n  - {}", line)?;
        }
        Ok(())
    }
}
