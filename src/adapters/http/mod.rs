//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with `dto`, `handlers`, and `routes`.
//! `build_router` assembles them behind the auth middleware and the
//! tower-http layers.

pub mod auth;
pub mod coaching;
pub mod error;
pub mod middleware;
pub mod questionnaire;
pub mod team;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::auth::{SharedPasswordGate, SignedSessionValidator};
use crate::application::{
    ApplyActionHandler, AskCoachHandler, CoachingLimits, GetResultsHandler,
    GetTeamSummaryHandler, LoadSessionHandler,
};
use crate::domain::questionnaire::QuestionCatalog;
use crate::ports::{AIProvider, SessionValidator, SnapshotStore, UserDirectory};

pub use error::{ApiError, ErrorResponse};
pub use middleware::{auth_middleware, AuthRejection, AuthState, RequireAuth};

/// Tunables for the HTTP surface.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub write_timeout: Duration,
    pub coaching: CoachingLimits,
    pub request_timeout: Duration,
    /// Empty or `*` means any origin.
    pub cors_origins: Vec<String>,
    /// Directory failure detail in team dashboard 500s.
    pub verbose_directory_errors: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            write_timeout: Duration::from_millis(500),
            coaching: CoachingLimits::default(),
            request_timeout: Duration::from_secs(90),
            cors_origins: Vec::new(),
            verbose_directory_errors: false,
        }
    }
}

/// Everything the router needs, wired by `main` or by tests.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<QuestionCatalog>,
    snapshots: Arc<dyn SnapshotStore>,
    validator: Arc<dyn SessionValidator>,
    ai_provider: Option<Arc<dyn AIProvider>>,
    directory: Option<Arc<dyn UserDirectory>>,
    login: Option<(Arc<SharedPasswordGate>, Arc<SignedSessionValidator>)>,
    settings: ApiSettings,
}

impl AppState {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        snapshots: Arc<dyn SnapshotStore>,
        validator: Arc<dyn SessionValidator>,
    ) -> Self {
        Self {
            catalog,
            snapshots,
            validator,
            ai_provider: None,
            directory: None,
            login: None,
            settings: ApiSettings::default(),
        }
    }

    pub fn with_ai_provider(mut self, provider: Arc<dyn AIProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Enables score recording and the team dashboard.
    pub fn with_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Enables `POST /api/auth/login`.
    pub fn with_login(
        mut self,
        gate: Arc<SharedPasswordGate>,
        sessions: Arc<SignedSessionValidator>,
    ) -> Self {
        self.login = Some((gate, sessions));
        self
    }

    pub fn with_settings(mut self, settings: ApiSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Builds the full API router.
pub fn build_router(state: AppState) -> Router {
    let AppState {
        catalog,
        snapshots,
        validator,
        ai_provider,
        directory,
        login,
        settings,
    } = state;

    let mut apply_handler =
        ApplyActionHandler::new(catalog.clone(), snapshots.clone(), settings.write_timeout);
    if let Some(directory) = &directory {
        apply_handler = apply_handler.with_directory(directory.clone());
    }

    let questionnaire = questionnaire::QuestionnaireHandlers::new(
        catalog.clone(),
        Arc::new(LoadSessionHandler::new(catalog.clone(), snapshots.clone())),
        Arc::new(apply_handler),
        Arc::new(GetResultsHandler::new(catalog.clone(), snapshots.clone())),
    );
    let coaching = coaching::CoachingHandlers::new(Arc::new(AskCoachHandler::new(
        catalog,
        snapshots,
        ai_provider,
        settings.coaching,
    )));

    let mut api = Router::new()
        .merge(questionnaire::questionnaire_routes(questionnaire))
        .merge(coaching::coaching_routes(coaching));

    if let Some((gate, sessions)) = login {
        api = api.merge(auth::auth_routes(auth::LoginHandlers::new(gate, sessions)));
    }
    if let Some(directory) = directory {
        let team = team::TeamHandlers::new(
            Arc::new(GetTeamSummaryHandler::new(directory)),
            settings.verbose_directory_errors,
        );
        api = api.merge(team::team_routes(team));
    }

    let auth_state: AuthState = validator;

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&settings.cors_origins))
                .layer(TimeoutLayer::new(settings.request_timeout))
                .layer(from_fn_with_state(auth_state, auth_middleware)),
        )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("No such route")),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_accepts_listed_origins() {
        // Invalid entries are dropped rather than failing startup.
        let _ = cors_layer(&["https://app.example.com".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }

    #[test]
    fn default_settings_match_config_defaults() {
        let settings = ApiSettings::default();
        assert_eq!(settings.write_timeout, Duration::from_millis(500));
        assert_eq!(settings.coaching.max_history_turns, 12);
        assert!(!settings.verbose_directory_errors);
    }
}
