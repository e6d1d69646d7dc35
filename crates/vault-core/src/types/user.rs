//! User account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// A stored user account.
///
/// `password_hash` is a salted Argon2id hash; verification is
/// rehash-and-compare, the plaintext is never stored or logged.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Primary key.
    pub id: i64,
    /// Unique username, the token subject.
    pub username: String,
    /// Salted one-way password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Unique username.
    pub username: String,
    /// Already-hashed password.
    pub password_hash: String,
    /// Initial role assignments.
    pub roles: Vec<Role>,
}
