//! HTTP handlers for the team dashboard.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{team_error, ApiError};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{GetTeamSummaryHandler, GetTeamSummaryQuery};
use crate::domain::foundation::TeamName;

#[derive(Clone)]
pub struct TeamHandlers {
    summary_handler: Arc<GetTeamSummaryHandler>,
    verbose_directory_errors: bool,
}

impl TeamHandlers {
    pub fn new(
        summary_handler: Arc<GetTeamSummaryHandler>,
        verbose_directory_errors: bool,
    ) -> Self {
        Self {
            summary_handler,
            verbose_directory_errors,
        }
    }
}

/// GET /api/team/:team - Color distribution and member profiles
pub async fn get_team_summary(
    State(handlers): State<TeamHandlers>,
    RequireAuth(user): RequireAuth,
    Path(team): Path<String>,
) -> Response {
    let team = match TeamName::new(team) {
        Ok(team) => team,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let query = GetTeamSummaryQuery {
        requester: user,
        team,
    };

    match handlers.summary_handler.handle(query).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => team_error(e, handlers.verbose_directory_errors).into_response(),
    }
}
