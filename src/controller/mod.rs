//! Seam between the router and the controller layer.
//!
//! The engine only decides *where* a request goes. What an action does is
//! owned by a [`Controller`] implementation supplied by the host.
//!
//! # Implementations
//!
//! - [`EchoController`] - Responds with the recognized dispatch target
//! - Test mocks available with `cfg(test)`

mod echo;

pub use echo::EchoController;

use async_trait::async_trait;
use axum::response::Response;

use crate::error::AppError;
use crate::routing::RouteMatch;

/// Receives recognized requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    /// Handles one dispatched request.
    ///
    /// # Errors
    ///
    /// Implementations return [`AppError`] to have it rendered as a JSON
    /// error response.
    async fn dispatch(&self, route: RouteMatch) -> Result<Response, AppError>;
}
