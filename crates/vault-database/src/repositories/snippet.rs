//! Snippet store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use vault_core::error::{AppError, ErrorKind};
use vault_core::result::AppResult;
use vault_core::traits::{OwnershipChecker, SnippetStore};
use vault_core::types::resource::Snippet;

/// PostgreSQL-backed snippet store.
#[derive(Debug, Clone)]
pub struct SnippetRepository {
    pool: PgPool,
}

impl SnippetRepository {
    /// Create a new snippet repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnershipChecker for SnippetRepository {
    async fn owner_of(&self, resource_id: i64) -> AppResult<Option<i64>> {
        sqlx::query_scalar("SELECT user_id FROM snippets WHERE id = $1")
            .bind(resource_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve snippet owner", e)
            })
    }
}

#[async_trait]
impl SnippetStore for SnippetRepository {
    async fn find(&self, id: i64) -> AppResult<Option<Snippet>> {
        sqlx::query_as::<_, Snippet>("SELECT * FROM snippets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find snippet", e))
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Snippet>> {
        sqlx::query_as::<_, Snippet>("DELETE FROM snippets WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete snippet", e))
    }

    async fn attach_tag(&self, snippet_id: i64, tag_id: i64) -> AppResult<()> {
        sqlx::query("INSERT INTO snippet_tags (snippet_id, tag_id) VALUES ($1, $2)")
            .bind(snippet_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    AppError::not_found("Snippet or tag not found")
                }
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::conflict("Tag is already on snippet")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to attach tag", e),
            })?;
        Ok(())
    }

    async fn detach_tag(&self, snippet_id: i64, tag_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM snippet_tags WHERE snippet_id = $1 AND tag_id = $2",
        )
        .bind(snippet_id)
        .bind(tag_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to detach tag", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::validation("Tag is not on snippet"));
        }
        Ok(())
    }
}
