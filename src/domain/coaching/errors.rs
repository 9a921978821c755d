//! Coaching error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Message shown when the coach cannot answer.
pub const COACH_UNAVAILABLE_MESSAGE: &str =
    "Sorry, the coach can't answer right now. Your results are still available. \
     Please try again in a moment.";

/// Errors from a coaching request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachingError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    /// The provider failed; results are unaffected.
    #[error("{apology}")]
    Unavailable { apology: String, retryable: bool },
}

impl CoachingError {
    pub fn unavailable(retryable: bool) -> Self {
        CoachingError::Unavailable {
            apology: COACH_UNAVAILABLE_MESSAGE.to_string(),
            retryable,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CoachingError::EmptyQuestion => ErrorCode::ValidationFailed,
            CoachingError::Unavailable { .. } => ErrorCode::AIProviderError,
        }
    }
}

impl From<CoachingError> for DomainError {
    fn from(err: CoachingError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            CoachingError::Unavailable { retryable, .. } => {
                domain.with_detail("retryable", retryable.to_string())
            }
            CoachingError::EmptyQuestion => domain,
        }
    }
}
