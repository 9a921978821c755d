//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("Try leading with the outcome.")
//!     .with_error(MockError::Overloaded);
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider for testing.
///
/// Responses are consumed in order; once the queue is empty a default
/// reply is returned.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success { content: String },
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate HTTP 529 from the provider.
    Overloaded,
    RateLimited { retry_after_secs: u32 },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Overloaded => AIError::unavailable("Overloaded"),
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn push(&self, response: MockResponse) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock coaching response".to_string(),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }

        match self.next_response() {
            MockResponse::Success { content } => Ok(CompletionResponse {
                content,
                usage: TokenUsage::new(10, 20),
                model: "mock-model-1".to_string(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(UserId::new("u").unwrap(), "t"))
            .with_message(MessageRole::User, text)
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order_then_default() {
        let provider = MockAIProvider::new()
            .with_response("first")
            .with_error(MockError::Overloaded);

        assert_eq!(provider.complete(request("a")).await.unwrap().content, "first");
        let err = provider.complete(request("b")).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(
            provider.complete(request("c")).await.unwrap().content,
            "Mock coaching response"
        );
    }

    #[tokio::test]
    async fn records_calls() {
        let provider = MockAIProvider::new();
        provider.complete(request("hello")).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].messages[0].content, "hello");
    }

    #[tokio::test]
    async fn reported_model_matches_completion_model() {
        let provider = MockAIProvider::new();
        let info = provider.provider_info();
        let response = provider.complete(request("hi")).await.unwrap();

        assert_eq!(info.name, "mock");
        assert_eq!(info.model, response.model);
    }

    #[test]
    fn auth_failure_is_not_retryable() {
        let err: AIError = MockError::AuthenticationFailed.into();
        assert!(!err.is_retryable());
    }
}
