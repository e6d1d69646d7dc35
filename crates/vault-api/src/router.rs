//! Route definitions for the SnippetVault HTTP API.
//!
//! All routes are mounted under `/api`. The authentication middleware
//! runs on every route; it injects an identity when a valid bearer token
//! is present and otherwise lets the request through anonymously, so the
//! public endpoints need no special casing.

use axum::{
    Router,
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(snippet_routes())
        .merge(tag_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, register, current-user
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/current-user", get(handlers::auth::current_user))
}

/// Admin user management
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Ownership-gated snippet endpoints
fn snippet_routes() -> Router<AppState> {
    Router::new()
        .route("/snippets/{id}", get(handlers::snippet::get_snippet))
        .route("/snippets/{id}", delete(handlers::snippet::delete_snippet))
        .route(
            "/snippets/{id}/tags/{tag_id}",
            post(handlers::snippet::attach_tag),
        )
        .route(
            "/snippets/{id}/tags/{tag_id}",
            delete(handlers::snippet::detach_tag),
        )
}

/// Ownership-gated tag endpoints
fn tag_routes() -> Router<AppState> {
    Router::new().route("/tags/{id}", delete(handlers::tag::delete_tag))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;

    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
