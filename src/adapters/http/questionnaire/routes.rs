//! HTTP routes for questionnaire endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{apply_action, get_catalog, get_results, get_session, QuestionnaireHandlers};

/// Creates the questionnaire router, mounted under `/api`.
pub fn questionnaire_routes(handlers: QuestionnaireHandlers) -> Router {
    Router::new()
        .route("/catalog", get(get_catalog))
        .route("/session", get(get_session))
        .route("/session/actions", post(apply_action))
        .route("/results", get(get_results))
        .with_state(handlers)
}
