//! # vault-core
//!
//! Shared foundations for the SnippetVault service.
//!
//! ## Modules
//!
//! - `error` — unified [`AppError`] and [`ErrorKind`] taxonomy
//! - `result` — the [`AppResult`] alias
//! - `config` — TOML + environment configuration
//! - `types` — domain types (users, roles, snippets, tags)
//! - `traits` — collaborator seams implemented by the database crate

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
