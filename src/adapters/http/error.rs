//! JSON error bodies and status mapping shared by every endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{AskCoachError, TeamSummaryError};
use crate::domain::coaching::CoachingError;
use crate::domain::foundation::{AuthError, ValidationError};
use crate::domain::session::SessionError;

/// Error body: `{code, message}` plus optional details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorResponse::not_found(message))
    }

    /// 500 that hides `detail` unless `verbose`.
    pub fn internal(detail: impl Into<String>, verbose: bool) -> Self {
        let detail = detail.into();
        tracing::error!(error = %detail, "Request failed");
        let message = if verbose {
            detail
        } else {
            "Internal server error".to_string()
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        SessionError::Validation(err).into()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        let status = match &err {
            SessionError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            SessionError::InvalidTransition { .. } => StatusCode::CONFLICT,
            SessionError::UnknownQuestion(_) | SessionError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        let code = err.code().to_string();
        let body = match &err {
            SessionError::InvalidTransition { from, action } => {
                ErrorResponse::new(code, err.to_string())
                    .with_details(serde_json::json!({ "stage": from, "action": action }))
            }
            _ => ErrorResponse::new(code, err.to_string()),
        };
        ApiError::new(status, body)
    }
}

impl From<CoachingError> for ApiError {
    fn from(err: CoachingError) -> Self {
        let code = err.code().to_string();
        match err {
            CoachingError::EmptyQuestion => ApiError::new(
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(code, "Question cannot be empty"),
            ),
            CoachingError::Unavailable { apology, retryable } => ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(code, apology)
                    .with_details(serde_json::json!({ "retryable": retryable })),
            ),
        }
    }
}

impl From<AskCoachError> for ApiError {
    fn from(err: AskCoachError) -> Self {
        match err {
            AskCoachError::Session(e) => e.into(),
            AskCoachError::Coaching(e) => e.into(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let (status, code, message) = match &err {
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN", "Invalid token"),
            AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED", "Token expired"),
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", "Invalid password")
            }
            AuthError::InsufficientPermissions => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", "Insufficient permissions")
            }
            AuthError::ServiceUnavailable(detail) => {
                tracing::error!("Auth service unavailable: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AUTH_UNAVAILABLE",
                    "Authentication service unavailable",
                )
            }
        };
        ApiError::new(status, ErrorResponse::new(code, message))
    }
}

/// Maps team dashboard errors; `verbose` controls 500 detail.
pub fn team_error(err: TeamSummaryError, verbose: bool) -> ApiError {
    match err {
        TeamSummaryError::Forbidden(_) => {
            ApiError::new(StatusCode::FORBIDDEN, ErrorResponse::new("FORBIDDEN", err.to_string()))
        }
        TeamSummaryError::Directory(e) => ApiError::internal(e.to_string(), verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::QuestionId;
    use crate::domain::session::Stage;

    #[test]
    fn session_errors_map_to_expected_statuses() {
        let conflict: ApiError = SessionError::invalid_transition(Stage::Intro, "next").into();
        assert_eq!(conflict.status, StatusCode::CONFLICT);
        assert_eq!(conflict.body.code, "INVALID_STATE_TRANSITION");

        let unknown: ApiError = SessionError::UnknownQuestion(QuestionId::new("q99").unwrap()).into();
        assert_eq!(unknown.status, StatusCode::BAD_REQUEST);

        let range: ApiError = ValidationError::out_of_range("slider_value", 1, 6, 9).into();
        assert_eq!(range.status, StatusCode::BAD_REQUEST);
        assert_eq!(range.body.code, "OUT_OF_RANGE");

        let unauth: ApiError = SessionError::NotAuthenticated.into();
        assert_eq!(unauth.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn coach_unavailable_is_503_with_apology() {
        let err: ApiError = CoachingError::unavailable(true).into();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.body.message.starts_with("Sorry"));
        assert_eq!(err.body.details, Some(serde_json::json!({ "retryable": true })));
    }

    #[test]
    fn internal_errors_hide_detail_unless_verbose() {
        assert_eq!(
            ApiError::internal("pool timed out", false).body.message,
            "Internal server error"
        );
        assert_eq!(ApiError::internal("pool timed out", true).body.message, "pool timed out");
    }

    #[test]
    fn auth_errors_map_to_401_or_503() {
        let bad: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(bad.status, StatusCode::UNAUTHORIZED);
        let down: ApiError = AuthError::service_unavailable("jwks").into();
        assert_eq!(down.status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
