//! JWT claims structure embedded in every issued token.

use serde::{Deserialize, Serialize};

/// The complete token payload.
///
/// Deliberately minimal: the subject and the validity window, nothing
/// else. Roles are *not* carried in the token — they are re-read from
/// the user directory on every request, so a role change takes effect
/// on the next request without reissuing tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
