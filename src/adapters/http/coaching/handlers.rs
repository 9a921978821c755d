//! HTTP handlers for coaching endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{AskCoachCommand, AskCoachHandler};

use super::dto::{AskCoachRequest, AskCoachResponse};

#[derive(Clone)]
pub struct CoachingHandlers {
    ask_handler: Arc<AskCoachHandler>,
}

impl CoachingHandlers {
    pub fn new(ask_handler: Arc<AskCoachHandler>) -> Self {
        Self { ask_handler }
    }
}

/// POST /api/coaching - Ask the coach about the caller's profile
pub async fn ask_coach(
    State(handlers): State<CoachingHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<AskCoachRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    let cmd = AskCoachCommand {
        user,
        question: req.question,
        history: req.history,
    };

    match handlers.ask_handler.handle(cmd).await {
        Ok(answer) => {
            let response = AskCoachResponse {
                answer_markdown: answer.answer_markdown,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
