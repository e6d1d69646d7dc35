//! The per-request identity model.

pub mod resolver;

pub use resolver::IdentityResolver;

use serde::{Deserialize, Serialize};

use vault_core::types::role::Role;

/// The authenticated principal for one request.
///
/// Built fresh from the user directory at resolution time and immutable
/// for the lifetime of the request; never cached across requests. The
/// role set comes strictly from the directory, never from the token
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// The user's primary key.
    pub user_id: i64,
    /// The username (token subject).
    pub username: String,
    /// Current role assignments.
    pub roles: Vec<Role>,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(user_id: i64, username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id,
            username: username.into(),
            roles,
        }
    }

    /// Returns whether the identity holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns whether the identity holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_is_additive() {
        let identity = Identity::new(1, "root", vec![Role::User, Role::Admin]);
        assert!(identity.has_role(Role::User));
        assert!(identity.is_admin());

        let plain = Identity::new(2, "alice", vec![Role::User]);
        assert!(plain.has_role(Role::User));
        assert!(!plain.is_admin());
    }
}
