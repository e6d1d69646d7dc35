//! Role gate for admin-only operations.

use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::types::role::Role;

use crate::identity::Identity;

/// Checks that the identity holds the required role.
///
/// Returns `Ok(())` if allowed, or `ErrorKind::Forbidden` if denied.
/// The denial never reveals which role was missing beyond the request
/// itself.
pub fn require_role(identity: &Identity, required: Role) -> AppResult<()> {
    if identity.has_role(required) {
        Ok(())
    } else {
        Err(AppError::forbidden("Forbidden"))
    }
}

/// Checks that the identity holds the admin role.
pub fn require_admin(identity: &Identity) -> AppResult<()> {
    require_role(identity, Role::Admin)
}
