//! HTTP handlers for questionnaire endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    ApplyActionCommand, ApplyActionHandler, GetResultsHandler, GetResultsQuery,
    LoadSessionHandler, LoadSessionQuery,
};
use crate::domain::questionnaire::QuestionCatalog;
use crate::domain::session::SessionAction;

use super::dto::{ActionRequest, CatalogResponse, ResultsResponse, SessionView};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuestionnaireHandlers {
    catalog: Arc<QuestionCatalog>,
    load_handler: Arc<LoadSessionHandler>,
    apply_handler: Arc<ApplyActionHandler>,
    results_handler: Arc<GetResultsHandler>,
}

impl QuestionnaireHandlers {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        load_handler: Arc<LoadSessionHandler>,
        apply_handler: Arc<ApplyActionHandler>,
        results_handler: Arc<GetResultsHandler>,
    ) -> Self {
        Self {
            catalog,
            load_handler,
            apply_handler,
            results_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/catalog - The ordered question list
pub async fn get_catalog(State(handlers): State<QuestionnaireHandlers>) -> Response {
    let response = CatalogResponse::from(handlers.catalog.as_ref());
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/session - Current session, resumed from its snapshot
pub async fn get_session(
    State(handlers): State<QuestionnaireHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let session = handlers.load_handler.handle(LoadSessionQuery { user }).await;
    let view = SessionView::new(&session, &handlers.catalog);
    (StatusCode::OK, Json(view)).into_response()
}

/// POST /api/session/actions - Apply one navigation or answer action
pub async fn apply_action(
    State(handlers): State<QuestionnaireHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<ActionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    let action = match SessionAction::try_from(req) {
        Ok(action) => action,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match handlers
        .apply_handler
        .handle(ApplyActionCommand { user, action })
        .await
    {
        Ok(session) => {
            let view = SessionView::new(&session, &handlers.catalog);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/results - Scored profile for a completed questionnaire
pub async fn get_results(
    State(handlers): State<QuestionnaireHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.results_handler.handle(GetResultsQuery { user }).await {
        Ok(results) => {
            let response = ResultsResponse::from(results);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
