//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`              - Health check (public)
//! - `GET  /routes`              - Route table listing (public)
//! - `GET  /routes/{name}/path`  - Path generation for a named route (public)
//! - everything else             - Engine dispatch, 404 outside the mount point
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Paths reach the engine untouched. A single trailing slash is tolerated by
//! recognition itself; empty segments (`//ib/underlyings`,
//! `/ib/underlyings//edit`) are never rewritten and never match.

use crate::api;
use crate::api::handlers::dispatch_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::diagnostic_routes()
        .fallback(dispatch_handler)
        .with_state(state)
        .layer(tracing::layer())
}
