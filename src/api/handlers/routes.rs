//! Handlers exposing the engine's route table.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::route::{RouteListResponse, RoutePathResponse};
use crate::error::AppError;
use crate::routing::Params;
use crate::state::AppState;

/// Lists every declared route in declaration order.
///
/// # Endpoint
///
/// `GET /routes`
///
/// # Response
///
/// ```json
/// {
///   "mount": "/ib",
///   "items": [
///     { "name": "root", "method": "GET", "path": "/ib", "target": "ib/underlyings#index" },
///     { "method": "POST", "path": "/ib/underlyings", "target": "ib/underlyings#create" }
///   ]
/// }
/// ```
pub async fn route_list_handler(State(state): State<AppState>) -> Json<RouteListResponse> {
    Json(RouteListResponse::new(&state.routes, &state.mount))
}

/// Generates the mounted path of a named route.
///
/// # Endpoint
///
/// `GET /routes/{name}/path?id=1`
///
/// Query parameters fill the route's pattern parameters.
///
/// # Errors
///
/// Returns 404 if no route has that name.
/// Returns 400 if a pattern parameter is missing or empty.
pub async fn route_path_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<Params>,
) -> Result<Json<RoutePathResponse>, AppError> {
    let path = state.routes.path_for(&name, &params)?;

    Ok(Json(RoutePathResponse {
        path: state.mount.join(&path),
        name,
    }))
}
