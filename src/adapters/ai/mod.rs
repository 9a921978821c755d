//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `AnthropicProvider` - Anthropic Messages API with retry and backoff
//! - `MockAIProvider` - Configurable mock for testing

mod anthropic_provider;
mod mock_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
