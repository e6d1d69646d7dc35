//! The user directory collaborator.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::role::Role;
use crate::types::user::{NewUser, User};

/// Lookup and lifecycle operations for user accounts.
///
/// Identity resolution reads this directory live on every request so
/// that role changes and account deletion take effect on the very next
/// request. Implementations must not cache across calls.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Look up a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Return the current role assignments for a user.
    async fn roles_of(&self, user_id: i64) -> AppResult<Vec<Role>>;

    /// List all user accounts.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Create a new account with its initial roles.
    ///
    /// A duplicate username yields `ErrorKind::Conflict`.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Delete an account, returning it, or `None` if it did not exist.
    async fn delete(&self, id: i64) -> AppResult<Option<User>>;

    /// Count accounts currently holding the admin role.
    async fn admin_count(&self) -> AppResult<i64>;
}
