//! Auth handlers — login, register, current-user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use vault_auth::policy::require_admin;
use vault_core::error::AppError;
use vault_core::types::role::Role;
use vault_core::types::user::NewUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Verifies the credential against the stored Argon2 hash and issues a
/// signed token. A missing user and a wrong password produce the same
/// 401 response.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()?;

    let user = state
        .directory
        .find_by_username(&req.username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    let verified = state
        .password_hasher
        .verify(&req.password, &user.password_hash)?;
    if !verified {
        return Err(AppError::invalid_credentials().into());
    }

    let identity = state.identity_resolver.resolve_by_username(&user.username).await?;
    let issued = state.jwt_encoder.issue(&user.username)?;

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: UserResponse::from_user(&user, identity.is_admin()),
    }))
}

/// POST /api/auth/register (admin only)
pub async fn register(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    require_admin(&current)?;
    req.validate()?;
    state.password_validator.validate(&req.password)?;

    let password_hash = state.password_hasher.hash(&req.password)?;
    let roles = if req.admin {
        vec![Role::User, Role::Admin]
    } else {
        vec![Role::User]
    };

    let created = state
        .directory
        .create(NewUser {
            username: req.username,
            password_hash,
            roles,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from_user(&created, req.admin)),
    ))
}

/// GET /api/auth/current-user
pub async fn current_user(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .directory
        .find_by_id(current.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(UserResponse::from_user(&user, current.is_admin())))
}
