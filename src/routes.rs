//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /create_link`          - Create a tracked link
//! - `GET    /links`                - List all links
//! - `GET    /links/{user_id}`      - List links by owner
//! - `GET    /link/{code}`          - Redirect (soft miss → "/")
//! - `GET    /link/{code}/decode`   - Decode website text
//! - `POST   /users`                - Signup
//! - `GET    /users`                - List users
//! - `DELETE /users/{user_id}`      - Delete user (cascades to links)
//! - `GET    /health`               - Liveness probe
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{delete, get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    all_links_handler, create_link_handler, create_user_handler, decode_handler,
    delete_user_handler, health_handler, list_users_handler, redirect_handler, user_links_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create_link", post(create_link_handler))
        .route("/links", get(all_links_handler))
        .route("/links/{user_id}", get(user_links_handler))
        .route("/link/{code}", get(redirect_handler))
        .route("/link/{code}/decode", get(decode_handler))
        .route("/users", post(create_user_handler).get(list_users_handler))
        .route("/users/{user_id}", delete(delete_user_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the router with trailing-slash normalization for serving.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
