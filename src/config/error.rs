//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session signing key must be at least {0} bytes")]
    SigningKeyTooShort(usize),

    #[error("Session TTL must be between 60 seconds and 30 days")]
    InvalidSessionTtl,

    #[error("OIDC issuer must use HTTPS in production")]
    IssuerMustBeHttps,

    #[error("AI max_history_turns must be at least 1")]
    InvalidHistoryLimit,

    #[error("Snapshot write timeout must be between 1 and 10000 ms")]
    InvalidWriteTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,
}
