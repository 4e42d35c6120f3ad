//! Route recognition and generation for the `ib` engine.
//!
//! # Data Flow
//!
//! ```text
//! Incoming request (method, path under the mount point)
//!     → mount.rs      (strip the host-configured prefix)
//!     → pattern.rs    (split + percent-decode segments, match patterns)
//!     → route_set.rs  (first match in specificity order)
//!     → RouteMatch { controller, action, params } or RoutingError::RouteNotFound
//! ```
//!
//! # Matching Policy
//!
//! - Literal segments win over parameters at the same position, so
//!   `/underlyings/new` can never be recognized as `show` with `id = "new"`
//! - Literal segments are case-sensitive
//! - A single trailing slash is ignored, empty segments never match
//! - Each segment is percent-decoded once before matching
//! - Anything after `?` is ignored
//!
//! The table is compiled once at startup and never mutated afterwards,
//! so a [`RouteSet`] can be shared behind an `Arc` without locking.

pub mod action;
pub mod error;
pub mod mount;
pub mod pattern;
pub mod route_set;
pub mod table;

pub use action::Action;
pub use error::{RouteDefinitionError, RoutingError};
pub use mount::Mount;
pub use pattern::{Params, Pattern};
pub use route_set::{Route, RouteMatch, RouteSet};
pub use table::{CONTROLLER, ENGINE_NAMESPACE, engine_routes};
