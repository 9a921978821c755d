//! Authentication configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::features::FeatureSet;
use super::server::Environment;

const MIN_SIGNING_KEY_BYTES: usize = 32;
const MAX_SESSION_TTL_SECS: u64 = 30 * 24 * 3600;

/// Authentication configuration.
///
/// The simple feature set needs `access_password` and
/// `session_signing_key`. The full feature set needs the OIDC fields.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared access password (simple)
    pub access_password: Option<String>,

    /// HS256 key for self-issued session tokens (simple)
    pub session_signing_key: Option<String>,

    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Identity provider issuer URL (full)
    pub oidc_issuer: Option<String>,

    /// Expected token audience (full)
    pub oidc_audience: Option<String>,

    /// Role in the `roles` claim granting dashboard access (full)
    #[serde(default = "default_admin_role")]
    pub admin_role: String,

    #[serde(default = "default_jwks_cache_ttl")]
    pub jwks_cache_ttl_secs: u64,
}

impl AuthConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_secs)
    }

    pub fn access_password_secret(&self) -> Option<Secret<String>> {
        non_empty(&self.access_password).map(|p| Secret::new(p.to_string()))
    }

    pub fn signing_key_secret(&self) -> Option<Secret<String>> {
        non_empty(&self.session_signing_key).map(|k| Secret::new(k.to_string()))
    }

    /// Validate the fields the chosen feature set relies on.
    pub fn validate(
        &self,
        feature_set: FeatureSet,
        environment: &Environment,
    ) -> Result<(), ValidationError> {
        match feature_set {
            FeatureSet::Simple => {
                if non_empty(&self.access_password).is_none() {
                    return Err(ValidationError::MissingRequired("AUTH__ACCESS_PASSWORD"));
                }
                let key = non_empty(&self.session_signing_key)
                    .ok_or(ValidationError::MissingRequired("AUTH__SESSION_SIGNING_KEY"))?;
                if key.len() < MIN_SIGNING_KEY_BYTES {
                    return Err(ValidationError::SigningKeyTooShort(MIN_SIGNING_KEY_BYTES));
                }
                if self.session_ttl_secs < 60 || self.session_ttl_secs > MAX_SESSION_TTL_SECS {
                    return Err(ValidationError::InvalidSessionTtl);
                }
            }
            FeatureSet::Full => {
                let issuer = non_empty(&self.oidc_issuer)
                    .ok_or(ValidationError::MissingRequired("AUTH__OIDC_ISSUER"))?;
                if non_empty(&self.oidc_audience).is_none() {
                    return Err(ValidationError::MissingRequired("AUTH__OIDC_AUDIENCE"));
                }
                if *environment == Environment::Production && !issuer.starts_with("https://") {
                    return Err(ValidationError::IssuerMustBeHttps);
                }
            }
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_password: None,
            session_signing_key: None,
            session_ttl_secs: default_session_ttl(),
            oidc_issuer: None,
            oidc_audience: None,
            admin_role: default_admin_role(),
            jwks_cache_ttl_secs: default_jwks_cache_ttl(),
        }
    }
}

fn default_session_ttl() -> u64 {
    12 * 3600
}

fn default_admin_role() -> String {
    "admin".to_string()
}

fn default_jwks_cache_ttl() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple() -> AuthConfig {
        AuthConfig {
            access_password: Some("let-me-in".to_string()),
            session_signing_key: Some("0123456789abcdef0123456789abcdef".to_string()),
            ..Default::default()
        }
    }

    fn full() -> AuthConfig {
        AuthConfig {
            oidc_issuer: Some("https://id.example.com".to_string()),
            oidc_audience: Some("style-compass".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl(), Duration::from_secs(43200));
        assert_eq!(config.jwks_cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.admin_role, "admin");
    }

    #[test]
    fn simple_requires_password_and_key() {
        let env = Environment::Development;
        assert!(simple().validate(FeatureSet::Simple, &env).is_ok());
        assert_eq!(
            AuthConfig::default().validate(FeatureSet::Simple, &env),
            Err(ValidationError::MissingRequired("AUTH__ACCESS_PASSWORD"))
        );

        let blank_key = AuthConfig {
            session_signing_key: Some("  ".to_string()),
            ..simple()
        };
        assert_eq!(
            blank_key.validate(FeatureSet::Simple, &env),
            Err(ValidationError::MissingRequired("AUTH__SESSION_SIGNING_KEY"))
        );
    }

    #[test]
    fn simple_rejects_short_key() {
        let config = AuthConfig {
            session_signing_key: Some("short".to_string()),
            ..simple()
        };
        assert_eq!(
            config.validate(FeatureSet::Simple, &Environment::Development),
            Err(ValidationError::SigningKeyTooShort(32))
        );
    }

    #[test]
    fn full_requires_oidc_and_https_in_production() {
        assert!(full().validate(FeatureSet::Full, &Environment::Production).is_ok());
        assert!(simple().validate(FeatureSet::Full, &Environment::Development).is_err());

        let plain_http = AuthConfig {
            oidc_issuer: Some("http://id.local".to_string()),
            ..full()
        };
        assert!(plain_http.validate(FeatureSet::Full, &Environment::Development).is_ok());
        assert_eq!(
            plain_http.validate(FeatureSet::Full, &Environment::Production),
            Err(ValidationError::IssuerMustBeHttps)
        );
    }

    #[test]
    fn secrets_skip_blank_values() {
        assert!(AuthConfig::default().access_password_secret().is_none());
        assert!(simple().access_password_secret().is_some());
        assert!(simple().signing_key_secret().is_some());
    }
}
