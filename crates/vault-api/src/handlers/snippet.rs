//! Snippet handlers — ownership-gated reads, deletes, and tag links.
//!
//! Every handler authorizes before it touches the store. Because the
//! ownership check passes for nonexistent resources, a missing snippet
//! surfaces as 404 from the operation rather than 403 from the gate.

use axum::Json;
use axum::extract::{Path, State};

use vault_core::error::AppError;
use vault_core::types::resource::{ResourceKind, Snippet};

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/snippets/{id}
pub async fn get_snippet(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Snippet>, ApiError> {
    state
        .policy
        .require_owner(&current, ResourceKind::Snippet, id)
        .await?;

    let snippet = state
        .snippets
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("Snippet not found"))?;

    Ok(Json(snippet))
}

/// DELETE /api/snippets/{id}
pub async fn delete_snippet(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .policy
        .require_owner(&current, ResourceKind::Snippet, id)
        .await?;

    state
        .snippets
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("Snippet not found"))?;

    Ok(Json(MessageResponse::new("Snippet deleted")))
}

/// POST /api/snippets/{id}/tags/{tag_id}
///
/// Composite gate: the caller must own both the snippet and the tag.
pub async fn attach_tag(
    State(state): State<AppState>,
    current: CurrentUser,
    Path((id, tag_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .policy
        .require_owner_all(
            &current,
            &[(ResourceKind::Snippet, id), (ResourceKind::Tag, tag_id)],
        )
        .await?;

    state.snippets.attach_tag(id, tag_id).await?;

    Ok(Json(MessageResponse::new("Tag attached")))
}

/// DELETE /api/snippets/{id}/tags/{tag_id}
pub async fn detach_tag(
    State(state): State<AppState>,
    current: CurrentUser,
    Path((id, tag_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .policy
        .require_owner_all(
            &current,
            &[(ResourceKind::Snippet, id), (ResourceKind::Tag, tag_id)],
        )
        .await?;

    state.snippets.detach_tag(id, tag_id).await?;

    Ok(Json(MessageResponse::new("Tag detached")))
}
