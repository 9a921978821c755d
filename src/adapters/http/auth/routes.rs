//! HTTP routes for the login endpoint.

use axum::{routing::post, Router};

use super::handlers::{login, LoginHandlers};

/// Creates the login router, mounted under `/api`.
pub fn auth_routes(handlers: LoginHandlers) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .with_state(handlers)
}
