//! Resource ownership collaborators.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::resource::{Snippet, Tag};

/// Resolves the current owner of a resource by id.
///
/// One implementation exists per [`crate::types::ResourceKind`]; the
/// policy engine composes them. `owner_of` must hit current storage on
/// every call — authorization decisions are never made from stale
/// ownership data.
#[async_trait]
pub trait OwnershipChecker: Send + Sync {
    /// Return the owning user id, or `None` if the resource does not exist.
    async fn owner_of(&self, resource_id: i64) -> AppResult<Option<i64>>;
}

/// The snippet collaborator: ownership plus the handful of operations
/// the guarded endpoints invoke after authorization.
#[async_trait]
pub trait SnippetStore: OwnershipChecker {
    /// Fetch a snippet.
    async fn find(&self, id: i64) -> AppResult<Option<Snippet>>;

    /// Delete a snippet, returning it, or `None` if it did not exist.
    async fn delete(&self, id: i64) -> AppResult<Option<Snippet>>;

    /// Attach a tag to a snippet.
    ///
    /// Missing snippet or tag yields `ErrorKind::NotFound`; an already
    /// attached pair yields `ErrorKind::Conflict`.
    async fn attach_tag(&self, snippet_id: i64, tag_id: i64) -> AppResult<()>;

    /// Detach a tag from a snippet.
    ///
    /// A pair that is not attached yields `ErrorKind::Validation`.
    async fn detach_tag(&self, snippet_id: i64, tag_id: i64) -> AppResult<()>;
}

/// The tag collaborator.
#[async_trait]
pub trait TagStore: OwnershipChecker {
    /// Delete a tag, returning it, or `None` if it did not exist.
    async fn delete(&self, id: i64) -> AppResult<Option<Tag>>;
}
