//! # vault-auth
//!
//! The authentication and authorization core of SnippetVault.
//!
//! ## Modules
//!
//! - `jwt` — signed, time-bounded identity token creation and parsing
//! - `password` — Argon2id credential hashing and strength policy
//! - `identity` — the per-request identity model and its resolver
//! - `policy` — role-based and ownership-based authorization decisions

pub mod identity;
pub mod jwt;
pub mod password;
pub mod policy;

pub use identity::{Identity, IdentityResolver};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::PolicyEngine;
