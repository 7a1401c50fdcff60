//! Link summarizer limits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_max_paragraphs() -> usize {
    5
}

const fn default_max_chars() -> usize {
    300
}

fn default_user_agent() -> String {
    "launchpad/0.1".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizerConfig {
    /// Whole-request timeout for the page fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How many leading `<p>` elements feed the summary.
    #[serde(default = "default_max_paragraphs")]
    pub max_paragraphs: usize,

    /// Summary length cap in characters, before the `...` marker.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_paragraphs: default_max_paragraphs(),
            max_chars: default_max_chars(),
            user_agent: default_user_agent(),
        }
    }
}

impl SummarizerConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject limits that would make every summary empty or every fetch fail.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: format!("summarizer.{field}"),
            reason: reason.into(),
        };
        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs", "must be at least 1"));
        }
        if self.max_paragraphs == 0 {
            return Err(invalid("max_paragraphs", "must be at least 1"));
        }
        if self.max_chars == 0 {
            return Err(invalid("max_chars", "must be at least 1"));
        }
        Ok(())
    }
}
