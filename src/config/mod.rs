//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `STYLE_COMPASS` prefix
//! and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use style_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod features;
mod server;
mod storage;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::{FeatureSet, FeaturesConfig};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// Only read by the full feature set
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `STYLE_COMPASS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STYLE_COMPASS__FEATURES__FEATURE_SET=full` -> `features.feature_set`
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STYLE_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate configuration for the selected feature set.
    ///
    /// The database section is checked only when the full feature set is on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth
            .validate(self.feature_set(), &self.server.environment)?;
        self.ai.validate()?;
        self.storage.validate()?;
        if self.feature_set().is_full() {
            self.database.validate()?;
        }
        Ok(())
    }

    pub fn feature_set(&self) -> FeatureSet {
        self.features.feature_set
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "STYLE_COMPASS__AUTH__ACCESS_PASSWORD",
        "STYLE_COMPASS__AUTH__SESSION_SIGNING_KEY",
        "STYLE_COMPASS__AUTH__OIDC_ISSUER",
        "STYLE_COMPASS__AUTH__OIDC_AUDIENCE",
        "STYLE_COMPASS__FEATURES__FEATURE_SET",
        "STYLE_COMPASS__DATABASE__URL",
        "STYLE_COMPASS__SERVER__PORT",
        "STYLE_COMPASS__SERVER__ENVIRONMENT",
    ];

    fn set_simple_env() {
        env::set_var("STYLE_COMPASS__AUTH__ACCESS_PASSWORD", "let-me-in");
        env::set_var(
            "STYLE_COMPASS__AUTH__SESSION_SIGNING_KEY",
            "0123456789abcdef0123456789abcdef",
        );
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(setup: impl FnOnce()) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        setup();
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_simple_config_loads_and_validates() {
        let config = load_with(set_simple_env).unwrap();
        assert_eq!(config.feature_set(), FeatureSet::Simple);
        assert_eq!(config.auth.access_password.as_deref(), Some("let-me-in"));
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config_requires_database() {
        let config = load_with(|| {
            env::set_var("STYLE_COMPASS__FEATURES__FEATURE_SET", "full");
            env::set_var("STYLE_COMPASS__AUTH__OIDC_ISSUER", "https://id.example.com");
            env::set_var("STYLE_COMPASS__AUTH__OIDC_AUDIENCE", "style-compass");
        })
        .unwrap();
        assert!(config.feature_set().is_full());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("DATABASE__URL"))
        );

        let config = load_with(|| {
            env::set_var("STYLE_COMPASS__FEATURES__FEATURE_SET", "full");
            env::set_var("STYLE_COMPASS__AUTH__OIDC_ISSUER", "https://id.example.com");
            env::set_var("STYLE_COMPASS__AUTH__OIDC_AUDIENCE", "style-compass");
            env::set_var("STYLE_COMPASS__DATABASE__URL", "postgres://localhost/compass");
        })
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_environment_fails_simple_validation() {
        let config = load_with(|| {}).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_port_and_production() {
        let config = load_with(|| {
            set_simple_env();
            env::set_var("STYLE_COMPASS__SERVER__PORT", "3000");
            env::set_var("STYLE_COMPASS__SERVER__ENVIRONMENT", "production");
        })
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
    }
}
