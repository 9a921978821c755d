//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Language-model completions for the coach
//! - `SnapshotStore` - Durable questionnaire session snapshots
//! - `SessionValidator` - Bearer token validation
//! - `UserDirectory` - Team roster and recorded scores (full feature set)

mod ai_provider;
mod session_validator;
mod snapshot_store;
mod user_directory;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use session_validator::SessionValidator;
pub use snapshot_store::{SnapshotStore, SnapshotStoreError};
pub use user_directory::{DirectoryError, UserDirectory};
