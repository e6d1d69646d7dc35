//! Collaborator trait seams.
//!
//! The auth core never talks to storage directly; it goes through these
//! traits. Production wiring uses the sqlx repositories from
//! `vault-database`, tests substitute in-memory implementations.

pub mod directory;
pub mod ownership;

pub use directory::UserDirectory;
pub use ownership::{OwnershipChecker, SnippetStore, TagStore};
