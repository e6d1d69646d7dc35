//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use vault_core::error::AppError;
use vault_core::result::AppResult;

/// Handles password hashing and verification using Argon2id.
///
/// Both operations are pure, CPU-bound, and intentionally slow; hashing
/// runs only at credential-creation time, never on the request hot path.
/// The plaintext is never logged.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// The salt and parameters are read from the stored hash; comparison
    /// is constant-time inside `argon2`. Returns `Ok(true)` on a match,
    /// `Ok(false)` on a mismatch.
    pub fn verify(&self, password: &str, stored_hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter2!").unwrap();
        assert!(hasher.verify("hunter2!", &hash).unwrap());
        assert!(!hasher.verify("hunter3!", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash("same-password").unwrap();
        let b = hasher.hash("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("anything", "not-a-phc-string").is_err());
    }
}
