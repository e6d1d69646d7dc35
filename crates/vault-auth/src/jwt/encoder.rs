//! JWT token creation with configurable signing key and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use vault_core::config::auth::AuthConfig;
use vault_core::error::AppError;
use vault_core::result::AppResult;

use super::claims::Claims;

/// Creates signed identity tokens.
///
/// The signing key and TTL come from process-wide configuration, loaded
/// once at startup and shared read-only by all concurrent requests.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

/// A freshly issued token with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// When the token stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.jwt_ttl_hours as i64,
        }
    }

    /// Issues a signed token for the given username, valid from now.
    pub fn issue(&self, username: &str) -> AppResult<IssuedToken> {
        self.issue_at(username, Utc::now())
    }

    /// Issues a signed token with an explicit issue time.
    ///
    /// Deterministic given a fixed key and clock; expiry tests lean on
    /// this to produce already-expired tokens.
    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> AppResult<IssuedToken> {
        let expires_at = now + Duration::hours(self.ttl_hours);
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
