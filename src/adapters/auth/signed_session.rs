//! Self-issued HS256 session tokens for the simple feature set.
//!
//! After the shared password is accepted, the server issues a short-lived
//! token for a fresh guest identity. The same component validates those
//! tokens on later requests.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::ports::SessionValidator;

const SESSION_ISSUER: &str = "style-compass";

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    iss: String,
    iat: i64,
    exp: i64,
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub user: AuthenticatedUser,
    pub expires_at: Timestamp,
}

/// Issues and validates signed session tokens.
pub struct SignedSessionValidator {
    signing_key: Secret<String>,
    ttl: Duration,
}

impl SignedSessionValidator {
    pub fn new(signing_key: Secret<String>, ttl: Duration) -> Self {
        Self { signing_key, ttl }
    }

    /// Issues a token for a new guest user.
    pub fn issue_guest(&self) -> Result<IssuedSession, AuthError> {
        self.issue(AuthenticatedUser::guest())
    }

    /// Issues a token for the given user.
    pub fn issue(&self, user: AuthenticatedUser) -> Result<IssuedSession, AuthError> {
        let now = Timestamp::now();
        let expires_at = now.plus_secs(self.ttl.as_secs());
        let claims = SessionClaims {
            sub: user.id.to_string(),
            iss: SESSION_ISSUER.to_string(),
            iat: now.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.signing_key.expose_secret().as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AuthError::service_unavailable("could not issue session")
        })?;

        Ok(IssuedSession {
            token,
            user,
            expires_at,
        })
    }
}

#[async_trait]
impl SessionValidator for SignedSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[SESSION_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.signing_key.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => {
                tracing::debug!("Session token rejected: {}", e);
                AuthError::InvalidToken
            }
        })?;

        let id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(id))
    }
}

impl std::fmt::Debug for SignedSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedSessionValidator")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
