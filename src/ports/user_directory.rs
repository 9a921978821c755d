//! User Directory Port - Team roster and recorded scores.
//!
//! Only wired in the full feature set. Recording scores is best-effort;
//! listing a team feeds the admin dashboard.

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, TeamName};
use crate::domain::scoring::Scores;
use crate::domain::team::TeamMember;

/// Errors from directory adapters.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Stored profile for {user_id} is invalid: {reason}")]
    InvalidRow { user_id: String, reason: String },
}

impl DirectoryError {
    pub fn database(message: impl Into<String>) -> Self {
        DirectoryError::Database(message.into())
    }
}

impl From<DirectoryError> for DomainError {
    fn from(err: DirectoryError) -> Self {
        DomainError::new(ErrorCode::DatabaseError, err.to_string())
    }
}

/// Port for the per-user profile directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Upserts the user's profile row with their latest scores.
    async fn record_scores(
        &self,
        user: &AuthenticatedUser,
        scores: &Scores,
    ) -> Result<(), DirectoryError>;

    /// Lists every member of a team, ordered by display name.
    ///
    /// Members who never reached results have `scores: None`.
    async fn list_team(&self, team: &TeamName) -> Result<Vec<TeamMember>, DirectoryError>;
}
