//! AI coaching configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Anthropic-backed coach configuration.
///
/// The API key is optional. Without it the coach is not wired and every
/// question gets the apology response.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    pub anthropic_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on retryable failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Most recent coaching turns forwarded to the model
    #[serde(default = "default_max_history_turns")]
    pub max_history_turns: usize,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_history_turns == 0 {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            max_tokens: default_max_tokens(),
            max_history_turns: default_max_history_turns(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    3
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_max_history_turns() -> usize {
    12
}
