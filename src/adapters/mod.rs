//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Anthropic and mock completion providers
//! - `auth` - Shared-password sessions, OIDC, and a mock validator
//! - `directory` - In-memory team roster
//! - `http` - axum router, handlers, and middleware
//! - `postgres` - sqlx-backed team roster
//! - `storage` - File and in-memory snapshot stores

pub mod ai;
pub mod auth;
pub mod directory;
pub mod http;
pub mod postgres;
pub mod storage;
