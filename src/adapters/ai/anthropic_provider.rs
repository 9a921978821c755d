//! Anthropic Provider - Implementation of AIProvider for Anthropic's Messages API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new(api_key)
//!     .with_model("claude-sonnet-4-20250514")
//!     .with_max_retries(3);
//!
//! let provider = AnthropicProvider::new(config)?;
//! ```
//!
//! # Retries
//!
//! Retryable failures (429, 529 overloaded, 503 and other 5xx, network,
//! timeout) are retried with exponential backoff: 1s, 2s, 4s, ...

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Base URL for the API (default: https://api.anthropic.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub initial_backoff: Duration,
    /// Default max_tokens when the request does not set one.
    pub max_tokens: u32,
}

impl AnthropicConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
            max_tokens: 1024,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Delay before retry number `attempt` (0-based).
    fn backoff_delay(&self, attempt: u32) -> Duration {
        self.initial_backoff * 2u32.saturating_pow(attempt)
    }
}

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Anthropic API provider implementation.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider with the given configuration.
    pub fn new(config: AnthropicConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to Anthropic's format.
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| AnthropicMessage {
                role: match msg.role {
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "assistant".to_string(),
                },
                content: msg.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: self.config.model.clone(),
            messages,
            system: request.system_prompt.clone(),
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
        }
    }

    /// Sends a request and handles transport errors.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let anthropic_request = self.to_anthropic_request(request);

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps a non-success status to an error.
    fn status_error(status: u16, error_body: String) -> AIError {
        match status {
            401 | 403 => AIError::AuthenticationFailed,
            429 => AIError::rate_limited(Self::parse_retry_after(&error_body)),
            529 => AIError::unavailable(format!("Overloaded: {}", error_body)),
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
            400..=499 => AIError::InvalidRequest(error_body),
            _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
        }
    }

    /// Parses retry-after from an error response body.
    fn parse_retry_after(error_body: &str) -> u32 {
        serde_json::from_str::<serde_json::Value>(error_body)
            .ok()
            .and_then(|parsed| {
                let msg = parsed.get("error")?.get("message")?.as_str()?.to_string();
                let idx = msg.find("try again in ")?;
                let digits: String = msg[idx + 13..]
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse::<u32>().ok()
            })
            .unwrap_or(60)
    }

    /// Parses a response, mapping error statuses first.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status.as_u16(), body));
        }

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(anthropic_response.into_completion())
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(request).await?;
        self.parse_response(response).await
    }
}

#[async_trait]
impl AIProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let mut retry_count = 0;

        loop {
            match self.attempt(&request).await {
                Ok(completion) => return Ok(completion),
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    let delay = self.config.backoff_delay(retry_count);
                    tracing::warn!(
                        trace_id = %request.metadata.trace_id,
                        retry_count,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Anthropic request failed, retrying"
                    );
                    sleep(delay).await;
                    retry_count += 1;
                }
                Err(err) => {
                    tracing::error!(
                        trace_id = %request.metadata.trace_id,
                        retry_count,
                        error = %err,
                        "Anthropic request failed"
                    );
                    return Err(err);
                }
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("anthropic", &self.config.model)
    }
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

impl AnthropicResponse {
    fn into_completion(self) -> CompletionResponse {
        let content = self
            .content
            .into_iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");

        let finish_reason = match self.stop_reason.as_deref() {
            Some("max_tokens") => FinishReason::Length,
            Some("refusal") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        CompletionResponse {
            content,
            usage: TokenUsage::new(self.usage.input_tokens, self.usage.output_tokens),
            model: self.model,
            finish_reason,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::ports::RequestMetadata;

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(UserId::new("u").unwrap(), "t"))
            .with_system_prompt("coach")
            .with_message(MessageRole::User, "hi")
            .with_message(MessageRole::Assistant, "hello")
            .with_message(MessageRole::User, "help")
    }

    #[test]
    fn config_builder_works() {
        let config = AnthropicConfig::new("test-key")
            .with_model("claude-3-haiku-20240307")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30))
            .with_max_retries(5)
            .with_max_tokens(512);

        assert_eq!(config.model, "claude-3-haiku-20240307");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn backoff_doubles_from_one_second() {
        let config = AnthropicConfig::new("k");
        assert_eq!(config.backoff_delay(0), Duration::from_secs(1));
        assert_eq!(config.backoff_delay(1), Duration::from_secs(2));
        assert_eq!(config.backoff_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn request_keeps_system_prompt_and_message_order() {
        let provider = AnthropicProvider::new(AnthropicConfig::new("k")).unwrap();
        let body = provider.to_anthropic_request(&request());

        assert_eq!(body.system.as_deref(), Some("coach"));
        assert_eq!(body.max_tokens, 1024);
        let roles: Vec<&str> = body.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["user", "assistant", "user"]);
    }

    #[test]
    fn messages_url_tolerates_trailing_slash() {
        let provider = AnthropicProvider::new(
            AnthropicConfig::new("k").with_base_url("http://localhost:9999/"),
        )
        .unwrap();
        assert_eq!(provider.messages_url(), "http://localhost:9999/v1/messages");
    }

    #[test]
    fn overload_and_server_errors_are_retryable() {
        assert!(AnthropicProvider::status_error(529, "overloaded".into()).is_retryable());
        assert!(AnthropicProvider::status_error(503, "unavailable".into()).is_retryable());
        assert!(AnthropicProvider::status_error(500, "boom".into()).is_retryable());
        assert!(AnthropicProvider::status_error(429, "{}".into()).is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(matches!(
            AnthropicProvider::status_error(401, String::new()),
            AIError::AuthenticationFailed
        ));
        assert!(!AnthropicProvider::status_error(400, "bad".into()).is_retryable());
    }

    #[test]
    fn parse_retry_after_reads_message_or_defaults() {
        let explicit = r#"{"error":{"message":"Rate limited, try again in 12s"}}"#;
        assert_eq!(AnthropicProvider::parse_retry_after(explicit), 12);

        let vague = r#"{"error":{"message":"Rate limit exceeded"}}"#;
        assert_eq!(AnthropicProvider::parse_retry_after(vague), 60);
    }

    #[test]
    fn response_joins_text_blocks() {
        let raw = r#"{
            "model": "claude-test",
            "content": [
                {"type": "text", "text": "Hello "},
                {"type": "tool_use"},
                {"type": "text", "text": "there"}
            ],
            "stop_reason": "max_tokens",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }"#;
        let parsed: AnthropicResponse = serde_json::from_str(raw).unwrap();
        let completion = parsed.into_completion();

        assert_eq!(completion.content, "Hello there");
        assert_eq!(completion.finish_reason, FinishReason::Length);
        assert_eq!(completion.usage.total_tokens, 15);
    }

    #[tokio::test]
    async fn unreachable_host_fails_after_retries() {
        let config = AnthropicConfig::new("k")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2))
            .with_max_retries(1)
            .with_initial_backoff(Duration::from_millis(1));
        let provider = AnthropicProvider::new(config).unwrap();

        let err = provider.complete(request()).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
