//! Session validation port for bearer token validation.
//!
//! Provider-agnostic: the shared-password gate issues its own signed
//! session tokens, the full feature set validates identity-provider JWTs,
//! and tests use a mock.
//!
//! # Security Requirements
//!
//! Implementations validating third-party tokens MUST check:
//! - **Issuer (iss)**: Token must come from the expected provider
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to validate Bearer tokens and attach the
/// authenticated user to the request.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed or bad-signature tokens
/// - `AuthError::TokenExpired` for expired tokens
/// - `AuthError::ServiceUnavailable` for transient provider errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
