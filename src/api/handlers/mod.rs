//! HTTP request handlers.
//!
//! [`dispatch`] is the engine itself; the other handlers are host-level
//! diagnostics mounted beside it.

pub mod dispatch;
pub mod health;
pub mod routes;

pub use dispatch::dispatch_handler;
pub use health::health_handler;
pub use routes::{route_list_handler, route_path_handler};
