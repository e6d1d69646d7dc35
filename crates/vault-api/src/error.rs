//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use vault_core::error::{AppError, ErrorKind};

/// Standard API error response body.
///
/// Every failure carries this single-field envelope, regardless of kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub message: String,
}

/// Newtype carrying an [`AppError`] across the handler boundary.
///
/// Handlers return `Result<_, ApiError>`; the `From<AppError>` impl lets
/// `?` lift domain errors directly.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: invalid value"),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");
        Self(AppError::validation(message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match &err.kind {
            ErrorKind::InvalidCredentials => (StatusCode::UNAUTHORIZED, err.message.clone()),
            ErrorKind::TokenExpired => (StatusCode::FORBIDDEN, err.message.clone()),
            ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, err.message.clone()),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, err.message.clone()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.message.clone()),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.message.clone()),
            ErrorKind::Conflict => (StatusCode::CONFLICT, err.message.clone()),
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn kinds_map_to_expected_statuses() {
        assert_eq!(
            status_of(AppError::invalid_credentials()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AppError::token_expired()), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(AppError::unauthorized("Unauthorized")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::forbidden("Forbidden")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::not_found("User not found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::conflict("Username already exists")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::database("connection reset")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let response = ApiError(AppError::database("password=hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
