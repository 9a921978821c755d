//! OIDC adapter for identity-provider JWT validation.
//!
//! Used by the full feature set. Tokens are validated by:
//!
//! 1. Fetching the provider's JWKS from its well-known endpoint
//! 2. Verifying the JWT signature against the matching key
//! 3. Checking issuer, audience, and expiry claims
//! 4. Mapping claims (including `team` and `roles`) to `AuthenticatedUser`
//!
//! # Example
//!
//! ```ignore
//! let config = OidcConfig::new("https://id.example.com", "style-compass")
//!     .with_admin_role("team-admin");
//! let validator = OidcSessionValidator::new(config)?;
//! let user = validator.validate("eyJ...").await?;
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{
    decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, TokenData, Validation,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, TeamName, UserId};
use crate::ports::SessionValidator;

const DEFAULT_JWKS_CACHE: Duration = Duration::from_secs(3600);
const DEFAULT_ADMIN_ROLE: &str = "admin";

/// Configuration for the OIDC adapter.
#[derive(Debug, Clone)]
pub struct OidcConfig {
    /// Issuer URL, used for JWKS discovery and `iss` validation.
    pub issuer_url: String,

    /// Expected `aud` claim.
    pub audience: String,

    /// How long fetched keys stay cached. Defaults to one hour.
    pub jwks_cache_duration: Option<Duration>,

    /// Role in the `roles` claim that marks a team admin.
    pub admin_role: String,
}

impl OidcConfig {
    pub fn new(issuer_url: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer_url: issuer_url.into(),
            audience: audience.into(),
            jwks_cache_duration: None,
            admin_role: DEFAULT_ADMIN_ROLE.to_string(),
        }
    }

    pub fn with_cache_duration(mut self, duration: Duration) -> Self {
        self.jwks_cache_duration = Some(duration);
        self
    }

    pub fn with_admin_role(mut self, role: impl Into<String>) -> Self {
        self.admin_role = role.into();
        self
    }

    fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.issuer_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct OidcClaims {
    sub: String,
    iss: String,
    #[serde(default)]
    aud: Audience,
    exp: i64,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    preferred_username: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

impl OidcClaims {
    /// Maps validated claims onto the domain user.
    fn into_user(self, admin_role: &str) -> Result<AuthenticatedUser, AuthError> {
        let id = UserId::new(&self.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {:?}", self.sub);
            AuthError::InvalidToken
        })?;

        let is_admin = self.roles.iter().any(|role| role == admin_role);
        let mut user = AuthenticatedUser::new(id).with_admin(is_admin);

        if let Some(email) = self.email {
            user = user.with_email(email);
        }
        if let Some(name) = self.name.or(self.preferred_username) {
            user = user.with_display_name(name);
        }
        if let Some(team) = self.team.and_then(|t| TeamName::new(t).ok()) {
            user = user.with_team(team);
        }
        Ok(user)
    }
}

/// Audience can be a single string or an array in JWTs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
enum Audience {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    fn contains(&self, expected: &str) -> bool {
        match self {
            Audience::None => false,
            Audience::Single(s) => s == expected,
            Audience::Multiple(v) => v.iter().any(|s| s == expected),
        }
    }
}

struct JwksCache {
    jwks: JwkSet,
    fetched_at: Instant,
    cache_duration: Duration,
}

impl JwksCache {
    fn new(jwks: JwkSet, cache_duration: Duration) -> Self {
        Self {
            jwks,
            fetched_at: Instant::now(),
            cache_duration,
        }
    }

    fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() > self.cache_duration
    }
}

/// Validates identity-provider JWTs against the provider's JWKS.
///
/// Keys are fetched lazily on first validation and refreshed after the
/// cache duration elapses.
pub struct OidcSessionValidator {
    config: OidcConfig,
    http_client: reqwest::Client,
    jwks_cache: Arc<RwLock<Option<JwksCache>>>,
}

impl OidcSessionValidator {
    pub fn new(config: OidcConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuthError::service_unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            jwks_cache: Arc::new(RwLock::new(None)),
        })
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthError> {
        let url = self.config.jwks_url();
        tracing::debug!("Fetching JWKS from {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch JWKS: {}", e);
            AuthError::service_unavailable(format!("Failed to fetch JWKS: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("JWKS endpoint returned {}", status);
            return Err(AuthError::service_unavailable(format!(
                "JWKS endpoint returned {}",
                status
            )));
        }

        let jwks: JwkSet = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse JWKS: {}", e);
            AuthError::service_unavailable(format!("Failed to parse JWKS: {}", e))
        })?;

        tracing::debug!("Fetched {} keys from JWKS", jwks.keys.len());
        Ok(jwks)
    }

    async fn get_jwks(&self) -> Result<JwkSet, AuthError> {
        {
            let cache = self.jwks_cache.read().await;
            if let Some(cached) = cache.as_ref().filter(|c| !c.is_expired()) {
                return Ok(cached.jwks.clone());
            }
        }

        let jwks = self.fetch_jwks().await?;

        let duration = self.config.jwks_cache_duration.unwrap_or(DEFAULT_JWKS_CACHE);
        *self.jwks_cache.write().await = Some(JwksCache::new(jwks.clone(), duration));

        Ok(jwks)
    }

    fn find_decoding_key(
        header: &jsonwebtoken::Header,
        jwks: &JwkSet,
    ) -> Result<(DecodingKey, Algorithm), AuthError> {
        let kid = header.kid.as_ref().ok_or_else(|| {
            tracing::warn!("JWT missing 'kid' header");
            AuthError::InvalidToken
        })?;

        let jwk = jwks.find(kid).ok_or_else(|| {
            tracing::warn!("No matching key found for kid: {}", kid);
            AuthError::InvalidToken
        })?;

        use jsonwebtoken::jwk::KeyAlgorithm;
        let algorithm = match jwk.common.key_algorithm {
            Some(KeyAlgorithm::RS256) | None => Algorithm::RS256,
            Some(KeyAlgorithm::RS384) => Algorithm::RS384,
            Some(KeyAlgorithm::RS512) => Algorithm::RS512,
            Some(KeyAlgorithm::ES256) => Algorithm::ES256,
            Some(KeyAlgorithm::ES384) => Algorithm::ES384,
            Some(other) => {
                tracing::warn!("Unsupported algorithm: {:?}", other);
                return Err(AuthError::InvalidToken);
            }
        };

        let decoding_key = DecodingKey::from_jwk(jwk).map_err(|e| {
            tracing::warn!("Failed to create decoding key: {}", e);
            AuthError::InvalidToken
        })?;

        Ok((decoding_key, algorithm))
    }

    fn validate_token(
        &self,
        token: &str,
        decoding_key: &DecodingKey,
        algorithm: Algorithm,
    ) -> Result<TokenData<OidcClaims>, AuthError> {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.config.issuer_url]);
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        decode::<OidcClaims>(token, decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!("Token rejected: {:?}", e.kind());
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })
    }
}

#[async_trait]
impl SessionValidator for OidcSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Failed to decode JWT header: {}", e);
            AuthError::InvalidToken
        })?;

        let jwks = self.get_jwks().await?;
        let (decoding_key, algorithm) = Self::find_decoding_key(&header, &jwks)?;
        let claims = self.validate_token(token, &decoding_key, algorithm)?.claims;

        if claims.iss != self.config.issuer_url || !claims.aud.contains(&self.config.audience) {
            tracing::warn!(iss = %claims.iss, "Issuer or audience mismatch after validation");
            return Err(AuthError::InvalidToken);
        }

        claims.into_user(&self.config.admin_role)
    }
}

impl std::fmt::Debug for OidcSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OidcSessionValidator")
            .field("issuer_url", &self.config.issuer_url)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(json: serde_json::Value) -> OidcClaims {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn jwks_url_ignores_trailing_slash() {
        let config = OidcConfig::new("https://id.example.com/", "api");
        assert_eq!(config.jwks_url(), "https://id.example.com/.well-known/jwks.json");
    }

    #[test]
    fn config_defaults_admin_role() {
        let config = OidcConfig::new("https://id.example.com", "api");
        assert_eq!(config.admin_role, "admin");
        assert_eq!(config.with_admin_role("lead").admin_role, "lead");
    }

    #[test]
    fn audience_matching() {
        assert!(Audience::Single("api".into()).contains("api"));
        assert!(Audience::Multiple(vec!["x".into(), "api".into()]).contains("api"));
        assert!(!Audience::None.contains("api"));
    }

    #[test]
    fn claims_map_team_and_admin_role() {
        let user = claims(serde_json::json!({
            "sub": "u-1", "iss": "i", "aud": "api", "exp": 0,
            "email": "u1@example.com", "name": "Uma",
            "team": " Platform ", "roles": ["member", "admin"]
        }))
        .into_user("admin")
        .unwrap();

        assert_eq!(user.id.as_str(), "u-1");
        assert_eq!(user.display_name.as_deref(), Some("Uma"));
        assert_eq!(user.team.as_ref().map(|t| t.as_str()), Some("Platform"));
        assert!(user.is_admin);
    }

    #[test]
    fn claims_without_roles_or_email_are_plain_members() {
        let user = claims(serde_json::json!({
            "sub": "u-2", "iss": "i", "exp": 0, "preferred_username": "u2"
        }))
        .into_user("admin")
        .unwrap();

        assert!(!user.is_admin);
        assert!(user.email.is_none());
        assert!(user.team.is_none());
        assert_eq!(user.display_name.as_deref(), Some("u2"));
    }

    #[test]
    fn blank_subject_is_rejected() {
        let result = claims(serde_json::json!({"sub": " ", "iss": "i", "exp": 0}))
            .into_user("admin");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn jwks_cache_expires() {
        let cache = JwksCache::new(JwkSet { keys: vec![] }, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));
        assert!(cache.is_expired());
    }

    #[tokio::test]
    async fn malformed_token_is_rejected_before_fetching_keys() {
        let validator =
            OidcSessionValidator::new(OidcConfig::new("http://127.0.0.1:9", "api")).unwrap();
        assert!(matches!(
            validator.validate("garbage").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OidcSessionValidator>();
    }
}
