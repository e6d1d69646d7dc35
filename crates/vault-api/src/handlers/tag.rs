//! Tag handlers.

use axum::Json;
use axum::extract::{Path, State};

use vault_core::error::AppError;
use vault_core::types::resource::ResourceKind;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// DELETE /api/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .policy
        .require_owner(&current, ResourceKind::Tag, id)
        .await?;

    state
        .tags
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("Tag not found"))?;

    Ok(Json(MessageResponse::new("Tag deleted")))
}
