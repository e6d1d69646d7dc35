//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use vault_core::config::auth::AuthConfig;
use vault_core::error::AppError;
use vault_core::result::AppResult;

use super::claims::Claims;

/// Validates token signatures and expiry.
///
/// An expired token is a distinct, user-visible condition: callers must
/// be able to tell "log in again" apart from "token was tampered with",
/// so expiry maps to `ErrorKind::TokenExpired` while every other defect
/// maps to `ErrorKind::Unauthorized`.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.jwt_leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies signature and structure, then expiry, and returns the
    /// embedded claims.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::token_expired(),
                _ => AppError::unauthorized("Invalid token"),
            },
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::{Duration, Utc};

    fn codec() -> (JwtEncoder, JwtDecoder) {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_hours: 10,
            ..AuthConfig::default()
        };
        (JwtEncoder::new(&config), JwtDecoder::new(&config))
    }

    #[test]
    fn test_issue_then_decode_resolves_same_subject() {
        let (encoder, decoder) = codec();
        let issued = encoder.issue("alice").unwrap();
        let claims = decoder.decode(&issued.token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let (encoder, decoder) = codec();
        // 10h TTL, issued 9h59m ago: still inside the window.
        let issued = encoder
            .issue_at("alice", Utc::now() - Duration::hours(10) + Duration::minutes(1))
            .unwrap();
        assert!(decoder.decode(&issued.token).is_ok());
    }

    #[test]
    fn test_expired_token_is_a_distinct_condition() {
        let (encoder, decoder) = codec();
        let issued = encoder
            .issue_at("alice", Utc::now() - Duration::hours(11))
            .unwrap();
        let err = decoder.decode(&issued.token).unwrap_err();
        assert_eq!(err.kind, vault_core::ErrorKind::TokenExpired);
    }

    #[test]
    fn test_tampered_payload_never_yields_an_identity() {
        let (encoder, decoder) = codec();
        let issued = encoder.issue("alice").unwrap();

        let mut parts: Vec<String> = issued.token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        // Flip one character in the middle of the payload segment.
        let payload = &mut parts[1];
        let mid = payload.len() / 2;
        let original = payload.as_bytes()[mid];
        let replacement = if original == b'A' { b'B' } else { b'A' };
        let mut bytes = payload.clone().into_bytes();
        bytes[mid] = replacement;
        *payload = String::from_utf8(bytes).unwrap();

        let err = decoder.decode(&parts.join(".")).unwrap_err();
        assert_eq!(err.kind, vault_core::ErrorKind::Unauthorized);
    }

    #[test]
    fn test_token_signed_with_other_key_rejected() {
        let (encoder, _) = codec();
        let other = JwtDecoder::new(&AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..AuthConfig::default()
        });
        let issued = encoder.issue("alice").unwrap();
        let err = other.decode(&issued.token).unwrap_err();
        assert_eq!(err.kind, vault_core::ErrorKind::Unauthorized);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let (_, decoder) = codec();
        let err = decoder.decode("not-a-token").unwrap_err();
        assert_eq!(err.kind, vault_core::ErrorKind::Unauthorized);
    }
}
