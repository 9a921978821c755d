//! HTTP routes for the team dashboard.

use axum::{routing::get, Router};

use super::handlers::{get_team_summary, TeamHandlers};

/// Creates the team router, mounted under `/api` in the full feature set.
pub fn team_routes(handlers: TeamHandlers) -> Router {
    Router::new()
        .route("/team/:team", get(get_team_summary))
        .with_state(handlers)
}
