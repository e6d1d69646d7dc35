//! Role-based and ownership-based authorization decisions.

pub mod engine;
pub mod role;

pub use engine::PolicyEngine;
pub use role::{require_admin, require_role};
