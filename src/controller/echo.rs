//! Controller that reflects the dispatch target back to the client.

use async_trait::async_trait;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::Controller;
use crate::api::dto::route::RouteMatchResponse;
use crate::error::AppError;
use crate::routing::RouteMatch;

/// Answers every dispatched request with `200 OK` and the recognized
/// `{controller, action, params}` triple as JSON.
///
/// Used when the engine runs without a real controller layer, e.g. to
/// inspect routing from a browser or `curl`.
pub struct EchoController;

impl EchoController {
    pub fn new() -> Self {
        debug!("Using EchoController (no controller layer attached)");
        Self
    }
}

impl Default for EchoController {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Controller for EchoController {
    async fn dispatch(&self, route: RouteMatch) -> Result<Response, AppError> {
        Ok(Json(RouteMatchResponse::from(route)).into_response())
    }
}
