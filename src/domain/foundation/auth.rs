//! Authentication types for the domain layer.
//!
//! These types represent a caller that passed the authentication gate.
//! They carry no provider dependencies: the shared-password gate and the
//! external identity provider both populate them through the
//! `SessionValidator` port.

use super::{TeamName, UserId};
use thiserror::Error;

/// A caller that passed the authentication gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Unique user identifier.
    pub id: UserId,

    /// Email address, if the identity provider supplied one.
    pub email: Option<String>,

    /// Display name, if available.
    pub display_name: Option<String>,

    /// Team the user belongs to (full feature set only).
    pub team: Option<TeamName>,

    /// Whether the user may view the team dashboard.
    pub is_admin: bool,
}

impl AuthenticatedUser {
    /// Creates a user with only an identifier.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            email: None,
            display_name: None,
            team: None,
            is_admin: false,
        }
    }

    /// Creates an anonymous guest admitted by the shared password.
    pub fn guest() -> Self {
        Self::new(UserId::guest())
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_team(mut self, team: TeamName) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Returns the display name, falling back to email and then the id.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(self.id.as_str())
    }

    /// Returns true if this user administers the given team.
    pub fn administers(&self, team: &TeamName) -> bool {
        self.is_admin && self.team.as_ref() == Some(team)
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The shared password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The caller lacks permission for this action.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// The authentication service is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the caller should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
