//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Path the engine is mounted at.
    pub mount: String,
    /// Number of routes in the compiled table.
    pub routes: usize,
}
