//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check: DB connectivity (public)
//! - `/api/*`      - REST API (gated by the access policy; Bearer token)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Access gate** - Policy-driven Bearer token authentication
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The gate middleware wraps the whole router, not just the API subtree: its
/// policy matches on full request paths (nested routers see stripped ones),
/// and it decides per path whether authentication is required. Adding a
/// public API route later is a policy change, not a wiring change.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes().layer(rate_limit::secure_layer());

    let router = Router::new()
        .route("/health", get(health_handler).layer(rate_limit::layer()))
        .nest("/api", api_router)
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
