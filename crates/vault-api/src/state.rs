//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vault_auth::identity::IdentityResolver;
use vault_auth::jwt::decoder::JwtDecoder;
use vault_auth::jwt::encoder::JwtEncoder;
use vault_auth::password::hasher::PasswordHasher;
use vault_auth::password::validator::PasswordValidator;
use vault_auth::policy::PolicyEngine;
use vault_core::config::AppConfig;
use vault_core::traits::{SnippetStore, TagStore, UserDirectory};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
/// Collaborators are held behind their traits so tests can substitute
/// in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Password strength validator
    pub password_validator: Arc<PasswordValidator>,
    /// Username-to-identity resolver
    pub identity_resolver: Arc<IdentityResolver>,
    /// Ownership policy engine
    pub policy: Arc<PolicyEngine>,

    // ── Collaborators ────────────────────────────────────────
    /// User directory
    pub directory: Arc<dyn UserDirectory>,
    /// Snippet store
    pub snippets: Arc<dyn SnippetStore>,
    /// Tag store
    pub tags: Arc<dyn TagStore>,
}
