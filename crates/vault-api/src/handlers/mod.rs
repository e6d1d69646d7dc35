//! HTTP request handlers, grouped by domain.

pub mod auth;
pub mod health;
pub mod snippet;
pub mod tag;
pub mod user;
