//! HTTP layer around the route table.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - Engine dispatch and diagnostic handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Diagnostic route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
