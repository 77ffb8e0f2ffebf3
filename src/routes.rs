//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /login`   - Token issuance (public)
//! - `GET  /health`  - Database health check (public)
//! - everything else - CRUD API (bearer token when auth is enabled)
//!
//! # Middleware
//!
//! - **Authentication** - Bearer JWT, only when `auth_required`
//! - **CORS** - Permissive, the API serves a browser front end
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slashes are trimmed before routing

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `auth_required` - when `true`, CRUD routes reject requests without a
///   valid bearer token; `/login` and `/health` stay public
pub fn app_router(state: AppState, auth_required: bool) -> NormalizePath<Router> {
    let mut protected = api::routes::protected_routes();

    if auth_required {
        protected =
            protected.route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    }

    let router = Router::new()
        .merge(protected)
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
