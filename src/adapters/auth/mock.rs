//! Mock session validator for testing.
//!
//! # Example
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_test_user("valid-token", "user-123")
//!     .with_user("admin-token", admin);
//!
//! let user = validator.validate("valid-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a valid token with a plain test user named after `user_id`.
    ///
    /// Blank ids are ignored.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        match UserId::new(&user_id) {
            Ok(id) => {
                let user = AuthenticatedUser::new(id)
                    .with_email(format!("{}@test.example.com", user_id))
                    .with_display_name(format!("Test User {}", user_id));
                self.with_user(token, user)
            }
            Err(_) => self,
        }
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.remove(token);
        }
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().ok().and_then(|e| e.clone()) {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(|_| AuthError::service_unavailable("mock validator poisoned"))?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validates_registered_tokens() {
        let validator = MockSessionValidator::new().with_test_user("tok", "alice");

        let user = validator.validate("tok").await.unwrap();
        assert_eq!(user.id.as_str(), "alice");
        assert_eq!(user.email.as_deref(), Some("alice@test.example.com"));
        assert!(matches!(
            validator.validate("other").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn removed_tokens_are_rejected() {
        let validator = MockSessionValidator::new().with_test_user("tok", "alice");
        validator.remove_token("tok");
        assert!(validator.validate("tok").await.is_err());
    }

    #[tokio::test]
    async fn forced_error_overrides_tokens() {
        let validator = MockSessionValidator::new()
            .with_test_user("tok", "alice")
            .with_error(AuthError::TokenExpired);
        assert!(matches!(
            validator.validate("tok").await,
            Err(AuthError::TokenExpired)
        ));
    }
}
