//! DTOs for the login endpoint.

use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::adapters::auth::IssuedSession;
use crate::domain::foundation::Timestamp;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Secret<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub expires_at: Timestamp,
}

impl From<IssuedSession> for LoginResponse {
    fn from(session: IssuedSession) -> Self {
        Self {
            token: session.token,
            user_id: session.user.id.to_string(),
            expires_at: session.expires_at,
        }
    }
}
