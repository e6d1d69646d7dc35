//! Bearer token authentication middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use vault_core::error::{AppError, ErrorKind};

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticates the request if it carries a bearer token.
///
/// A request without an `Authorization: Bearer` header proceeds
/// anonymously; route handlers decide via [`crate::extractors::CurrentUser`]
/// whether anonymity is acceptable. A header that is present but does not
/// validate short-circuits here: an expired token yields 403, any other
/// invalid token 401. A token whose subject no longer exists in the
/// directory is treated as invalid, not as a missing resource.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let bearer = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if let Some(token) = bearer {
        let claims = state.jwt_decoder.decode(token)?;

        let identity = state
            .identity_resolver
            .resolve_by_username(&claims.sub)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::NotFound => AppError::unauthorized("Unauthorized"),
                _ => e,
            })?;

        request.extensions_mut().insert(identity);
    }

    Ok(next.run(request).await)
}
