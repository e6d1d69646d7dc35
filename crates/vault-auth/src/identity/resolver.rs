//! Maps a validated token subject (or login username) to a full identity.

use std::sync::Arc;

use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::traits::UserDirectory;

use super::Identity;

/// Resolves usernames to identities via a live directory read.
///
/// No caching: each resolution hits the directory, so role revocation
/// or account deletion takes effect on the very next request. Invoked
/// both during login (after password verification) and during
/// per-request token validation.
#[derive(Clone)]
pub struct IdentityResolver {
    /// The user directory collaborator.
    directory: Arc<dyn UserDirectory>,
}

impl IdentityResolver {
    /// Creates a new resolver over the given directory.
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Resolves a username to its current identity.
    pub async fn resolve_by_username(&self, username: &str) -> AppResult<Identity> {
        let user = self
            .directory
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let roles = self.directory.roles_of(user.id).await?;
        tracing::debug!(user_id = user.id, ?roles, "Resolved identity");

        Ok(Identity::new(user.id, user.username, roles))
    }
}
