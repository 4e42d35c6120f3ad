//! # ib-engine
//!
//! A mountable Axum engine that routes the `underlyings` resource of the
//! `ib` broker integration.
//!
//! The engine answers one question: which controller action does an
//! `(HTTP method, path)` pair dispatch to? Controllers themselves live
//! behind the [`controller::Controller`] trait and are supplied by the host.
//!
//! ## Architecture
//!
//! - **Routing** ([`routing`]) - Literal route table, recognition, path generation, mounting
//! - **Controller seam** ([`controller`]) - Trait the router dispatches into
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## Routes
//!
//! ```text
//! GET    /                        ib/underlyings#index
//! GET    /underlyings             ib/underlyings#index
//! POST   /underlyings             ib/underlyings#create
//! GET    /underlyings/new         ib/underlyings#new
//! GET    /underlyings/{id}/edit   ib/underlyings#edit
//! GET    /underlyings/{id}        ib/underlyings#show
//! PATCH  /underlyings/{id}        ib/underlyings#update
//! PUT    /underlyings/{id}        ib/underlyings#update
//! DELETE /underlyings/{id}        ib/underlyings#destroy
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export IB_MOUNT_PATH="/ib"   # Optional
//! cargo run
//! curl http://localhost:3000/ib/underlyings/1/edit
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod controller;
pub mod error;
pub mod routing;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::controller::{Controller, EchoController};
    pub use crate::error::AppError;
    pub use crate::routing::{
        Action, Mount, Params, RouteMatch, RouteSet, RoutingError, engine_routes,
    };
    pub use crate::state::AppState;
}
