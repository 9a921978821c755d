//! Session-specific error types.

use thiserror::Error;

use super::Stage;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::questionnaire::QuestionId;

/// Errors raised by questionnaire session operations.
///
/// A failed operation never mutates the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The authentication gate has not been passed.
    #[error("Authentication is required to continue")]
    NotAuthenticated,

    /// The action is not allowed in the current stage.
    #[error("Cannot {action} while in the {from} stage")]
    InvalidTransition { from: Stage, action: String },

    /// The answer references a question that is not in the catalog.
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SessionError {
    pub fn invalid_transition(from: Stage, action: impl Into<String>) -> Self {
        SessionError::InvalidTransition {
            from,
            action: action.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotAuthenticated => ErrorCode::NotAuthenticated,
            SessionError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            SessionError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            SessionError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            SessionError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            SessionError::InvalidTransition { from, action } => domain
                .with_detail("stage", from.to_string())
                .with_detail("action", action),
            SessionError::UnknownQuestion(id) => domain.with_detail("question_id", id.to_string()),
            _ => domain,
        }
    }
}
