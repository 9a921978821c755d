//! HTTP handlers for the login endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::ExposeSecret;

use crate::adapters::auth::{SharedPasswordGate, SignedSessionValidator};
use crate::adapters::http::error::ApiError;

use super::dto::{LoginRequest, LoginResponse};

#[derive(Clone)]
pub struct LoginHandlers {
    gate: Arc<SharedPasswordGate>,
    sessions: Arc<SignedSessionValidator>,
}

impl LoginHandlers {
    pub fn new(gate: Arc<SharedPasswordGate>, sessions: Arc<SignedSessionValidator>) -> Self {
        Self { gate, sessions }
    }
}

/// POST /api/auth/login - Exchange the shared password for a session token
pub async fn login(
    State(handlers): State<LoginHandlers>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    if let Err(e) = handlers.gate.check(req.password.expose_secret()) {
        tracing::warn!("Login rejected: wrong password");
        return ApiError::from(e).into_response();
    }

    match handlers.sessions.issue_guest() {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "Guest session issued");
            (StatusCode::OK, Json(LoginResponse::from(session))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
