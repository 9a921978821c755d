//! HTTP routes for coaching endpoints.

use axum::{routing::post, Router};

use super::handlers::{ask_coach, CoachingHandlers};

/// Creates the coaching router, mounted under `/api`.
pub fn coaching_routes(handlers: CoachingHandlers) -> Router {
    Router::new()
        .route("/coaching", post(ask_coach))
        .with_state(handlers)
}
