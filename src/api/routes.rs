//! API route configuration.

use crate::api::handlers::{health_handler, route_list_handler, route_path_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Host-level diagnostic routes served beside the engine.
///
/// # Endpoints
///
/// - `GET /health` - Service status, mount point and route count
/// - `GET /routes` - The engine's route table as mounted
/// - `GET /routes/{name}/path` - Mounted path of a named route
///
/// These take precedence over the engine when it is mounted at `/`.
pub fn diagnostic_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/routes", get(route_list_handler))
        .route("/routes/{name}/path", get(route_path_handler))
}
