//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};

use vault_auth::policy::require_admin;
use vault_core::error::AppError;
use vault_core::types::role::Role;

use crate::dto::response::{MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    require_admin(&current)?;

    let users = state.directory.list().await?;
    let mut out = Vec::with_capacity(users.len());
    for user in users {
        let roles = state.directory.roles_of(user.id).await?;
        out.push(UserResponse::from_user(&user, roles.contains(&Role::Admin)));
    }
    Ok(Json(out))
}

/// GET /api/users/{id} (admin only)
pub async fn get_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    require_admin(&current)?;

    let user = state
        .directory
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    let roles = state.directory.roles_of(user.id).await?;

    Ok(Json(UserResponse::from_user(&user, roles.contains(&Role::Admin))))
}

/// DELETE /api/users/{id} (admin only)
///
/// Refuses to remove the last remaining admin account.
pub async fn delete_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&current)?;

    let roles = state.directory.roles_of(id).await?;
    if roles.contains(&Role::Admin) && state.directory.admin_count().await? <= 1 {
        return Err(AppError::validation("Cannot delete last admin user").into());
    }

    state
        .directory
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(MessageResponse::new("User deleted")))
}
