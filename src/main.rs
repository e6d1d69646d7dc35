//! SnippetVault Server — multi-user snippet management service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use vault_api::state::AppState;
use vault_auth::identity::IdentityResolver;
use vault_auth::jwt::decoder::JwtDecoder;
use vault_auth::jwt::encoder::JwtEncoder;
use vault_auth::password::hasher::PasswordHasher;
use vault_auth::password::validator::PasswordValidator;
use vault_auth::policy::PolicyEngine;
use vault_core::config::AppConfig;
use vault_core::error::AppError;
use vault_core::traits::{OwnershipChecker, SnippetStore, TagStore, UserDirectory};
use vault_core::types::resource::ResourceKind;
use vault_database::DatabasePool;
use vault_database::repositories::snippet::SnippetRepository;
use vault_database::repositories::tag::TagRepository;
use vault_database::repositories::user::UserRepository;

#[tokio::main]
async fn main() {
    let env = std::env::var("VAULT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SnippetVault v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = DatabasePool::connect(&config.database).await?;

    db.migrate().await?;

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let snippet_repo = Arc::new(SnippetRepository::new(db.pool().clone()));
    let tag_repo = Arc::new(TagRepository::new(db.pool().clone()));

    // ── Auth core ────────────────────────────────────────────────
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let identity_resolver = Arc::new(IdentityResolver::new(
        Arc::clone(&user_repo) as Arc<dyn UserDirectory>
    ));

    let policy = Arc::new(
        PolicyEngine::builder()
            .register(
                ResourceKind::Snippet,
                Arc::clone(&snippet_repo) as Arc<dyn OwnershipChecker>,
            )
            .register(
                ResourceKind::Tag,
                Arc::clone(&tag_repo) as Arc<dyn OwnershipChecker>,
            )
            .build(),
    );

    // ── HTTP server ──────────────────────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        password_validator,
        identity_resolver,
        policy,
        directory: user_repo as Arc<dyn UserDirectory>,
        snippets: snippet_repo as Arc<dyn SnippetStore>,
        tags: tag_repo as Arc<dyn TagStore>,
    };

    let app = vault_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(
            vault_core::ErrorKind::Internal,
            format!("Failed to bind {addr}"),
            e,
        ))?;

    tracing::info!("SnippetVault server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| {
            AppError::with_source(vault_core::ErrorKind::Internal, "Server error", e)
        })?;

    db.close().await;
    tracing::info!("SnippetVault server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
