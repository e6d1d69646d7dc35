//! Tag store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use vault_core::error::{AppError, ErrorKind};
use vault_core::result::AppResult;
use vault_core::traits::{OwnershipChecker, TagStore};
use vault_core::types::resource::Tag;

/// PostgreSQL-backed tag store.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    /// Create a new tag repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnershipChecker for TagRepository {
    async fn owner_of(&self, resource_id: i64) -> AppResult<Option<i64>> {
        sqlx::query_scalar("SELECT user_id FROM tags WHERE id = $1")
            .bind(resource_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve tag owner", e)
            })
    }
}

#[async_trait]
impl TagStore for TagRepository {
    async fn delete(&self, id: i64) -> AppResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("DELETE FROM tags WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete tag", e))
    }
}
