//! Request DTOs with validation rules.

use serde::Deserialize;
use validator::Validate;

/// POST /api/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username to authenticate as.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// POST /api/auth/register (admin only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username for the new account.
    #[validate(length(min = 3, max = 50, message = "must be 3 to 50 characters"))]
    pub username: String,
    /// Plaintext password; strength is checked separately.
    pub password: String,
    /// Grant the admin role in addition to the base user role.
    #[serde(default)]
    pub admin: bool,
}
