#![forbid(unsafe_code)]

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use style_compass::adapters::ai::{AnthropicConfig, AnthropicProvider};
use style_compass::adapters::auth::{
    OidcConfig, OidcSessionValidator, SharedPasswordGate, SignedSessionValidator,
};
use style_compass::adapters::http::{build_router, ApiSettings, AppState};
use style_compass::adapters::postgres::PostgresUserDirectory;
use style_compass::adapters::storage::FileSnapshotStore;
use style_compass::application::CoachingLimits;
use style_compass::config::{AppConfig, FeatureSet};
use style_compass::domain::questionnaire::QuestionCatalog;
use style_compass::ports::{AIProvider, SessionValidator, SnapshotStore};

type BoxError = Box<dyn Error + Send + Sync>;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn load_catalog(config: &AppConfig) -> Result<Arc<QuestionCatalog>, BoxError> {
    let catalog = match &config.storage.catalog_path {
        Some(path) => {
            let catalog = QuestionCatalog::from_path(path)?;
            info!(path = %path.display(), questions = catalog.len(), "Loaded question catalog");
            catalog
        }
        None => QuestionCatalog::bundled().clone(),
    };
    Ok(Arc::new(catalog))
}

fn ai_provider(config: &AppConfig) -> Result<Option<Arc<dyn AIProvider>>, BoxError> {
    let key = match &config.ai.anthropic_api_key {
        Some(key) if config.ai.has_anthropic() => key.clone(),
        _ => {
            warn!("No Anthropic API key configured; the coach will answer with an apology");
            return Ok(None);
        }
    };

    let provider = AnthropicProvider::new(
        AnthropicConfig::new(key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries)
            .with_max_tokens(config.ai.max_tokens),
    )?;
    let info = provider.provider_info();
    info!(provider = %info.name, model = %info.model, "AI coaching enabled");
    Ok(Some(Arc::new(provider)))
}

async fn build_state(config: &AppConfig) -> Result<AppState, BoxError> {
    let catalog = load_catalog(config)?;
    let snapshots: Arc<dyn SnapshotStore> =
        Arc::new(FileSnapshotStore::new(&config.storage.snapshot_dir));

    let settings = ApiSettings {
        write_timeout: config.storage.write_timeout(),
        coaching: CoachingLimits {
            max_history_turns: config.ai.max_history_turns,
            max_tokens: config.ai.max_tokens,
        },
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
        verbose_directory_errors: config.features.verbose_directory_errors,
    };

    let state = match config.feature_set() {
        FeatureSet::Simple => {
            let password = config
                .auth
                .access_password_secret()
                .ok_or("auth.access_password is required")?;
            let signing_key = config
                .auth
                .signing_key_secret()
                .ok_or("auth.session_signing_key is required")?;

            let sessions = Arc::new(SignedSessionValidator::new(
                signing_key,
                config.auth.session_ttl(),
            ));
            let validator: Arc<dyn SessionValidator> = sessions.clone();
            AppState::new(catalog, snapshots, validator)
                .with_login(Arc::new(SharedPasswordGate::new(password)), sessions)
        }
        FeatureSet::Full => {
            let issuer = config
                .auth
                .oidc_issuer
                .clone()
                .ok_or("auth.oidc_issuer is required")?;
            let audience = config
                .auth
                .oidc_audience
                .clone()
                .ok_or("auth.oidc_audience is required")?;
            let validator = OidcSessionValidator::new(
                OidcConfig::new(issuer, audience)
                    .with_cache_duration(config.auth.jwks_cache_ttl())
                    .with_admin_role(config.auth.admin_role.clone()),
            )?;

            let pool = PgPoolOptions::new()
                .min_connections(config.database.min_connections)
                .max_connections(config.database.max_connections)
                .acquire_timeout(config.database.acquire_timeout())
                .connect(&config.database.url)
                .await?;
            if config.database.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                info!("Database migrations applied");
            }

            AppState::new(catalog, snapshots, Arc::new(validator))
                .with_directory(Arc::new(PostgresUserDirectory::new(pool)))
        }
    };

    let state = match ai_provider(config)? {
        Some(provider) => state.with_ai_provider(provider),
        None => state,
    };
    Ok(state.with_settings(settings))
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let state = build_state(&config).await?;
    let app = build_router(state);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        feature_set = %config.feature_set(),
        environment = ?config.server.environment,
        "style-compass listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("style-compass stopped");
    Ok(())
}
