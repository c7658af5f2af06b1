//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`      - Health check (public)
//! - `POST   /create`      - Create a mapping (public)
//! - `GET    /{id}`        - Redirect to the target (public)
//! - `GET    /{id}/stats`  - Per-client visit counts (auth token required)
//! - `DELETE /{id}`        - Remove a mapping (auth token required)
//!
//! Token-gated routes run the authorization gate inside the handler rather
//! than as a route layer: the gate's outcome ordering checks identifier
//! existence before credential presence, which a rejecting middleware could
//! not express.

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    create_handler, delete_handler, health_handler, redirect_handler, stats_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/create", post(create_handler))
        .route("/{id}", get(redirect_handler).delete(delete_handler))
        .route("/{id}/stats", get(stats_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
