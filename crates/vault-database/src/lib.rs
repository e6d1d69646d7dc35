//! # vault-database
//!
//! PostgreSQL collaborators for SnippetVault: connection pool with its
//! migration runner, and the sqlx repositories implementing the
//! `vault-core` trait seams.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
