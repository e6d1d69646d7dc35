//! Convenience result type alias for SnippetVault.

use crate::error::AppError;

/// A specialized `Result` type for SnippetVault operations.
pub type AppResult<T> = Result<T, AppError>;
