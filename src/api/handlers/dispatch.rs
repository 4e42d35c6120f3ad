//! Engine entry point: recognizes a request and hands it to the controller.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};
use tracing::debug;

use crate::error::AppError;
use crate::routing::RoutingError;
use crate::state::AppState;

/// Dispatches any request under the engine mount point.
///
/// # Flow
///
/// 1. Strip the mount prefix from the request path
/// 2. Recognize (method, relative path) against the route table
/// 3. Pass the resulting [`crate::routing::RouteMatch`] to the controller
///
/// # Errors
///
/// Returns 404 if the path is outside the mount point or no route matches.
/// Any error returned by the controller is passed through.
pub async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    let path = uri.path();

    let recognized = match state.mount.strip(path) {
        Some(relative) => state.routes.recognize(&method, relative),
        None => Err(RoutingError::RouteNotFound {
            method: method.clone(),
            path: path.to_string(),
        }),
    };

    // Report misses against the host path, not the engine-relative one.
    let route = match recognized {
        Ok(route) => route,
        Err(RoutingError::RouteNotFound { method, .. }) => {
            debug!(%method, path, "No route matches");
            metrics::counter!("ib_route_not_found_total").increment(1);
            return Err(RoutingError::RouteNotFound {
                method,
                path: path.to_string(),
            }
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    debug!(%method, path, target = %route.target(), "Dispatching");
    metrics::counter!("ib_route_dispatch_total", "action" => route.action.as_str()).increment(1);

    state.controller.dispatch(route).await
}
