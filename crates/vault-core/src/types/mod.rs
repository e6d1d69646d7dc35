//! Domain types shared across the workspace.

pub mod resource;
pub mod role;
pub mod user;

pub use resource::{ResourceKind, Snippet, Tag};
pub use role::Role;
pub use user::{NewUser, User};
