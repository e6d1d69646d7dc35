//! Ownership-bearing resources and their kind discriminator.
//!
//! Snippets and tags appear here only as far as authorization needs
//! them: an id, an owning user, and enough fields to echo back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of resource that participate in ownership checks.
///
/// Used to key ownership checkers registered with the policy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A code snippet.
    Snippet,
    /// A user-scoped tag.
    Tag,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snippet => write!(f, "snippet"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

/// A stored snippet.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Snippet {
    /// Primary key.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Snippet title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A stored tag.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    /// Primary key.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Tag name.
    pub name: String,
    /// Display color as a hex string.
    pub color: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
