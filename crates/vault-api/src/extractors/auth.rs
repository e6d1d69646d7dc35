//! `CurrentUser` extractor — the authenticated identity for a request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vault_auth::identity::Identity;
use vault_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
///
/// The authentication middleware resolves the bearer token and stores
/// the [`Identity`] in request extensions; this extractor reads it back.
/// A request that carried no valid token has no identity, so any handler
/// taking `CurrentUser` rejects it with 401. Anonymous access is only
/// possible on routes that never ask for this extractor.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl std::ops::Deref for CurrentUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError(AppError::unauthorized("Unauthorized")))
    }
}
