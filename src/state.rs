//! Shared application state.

use std::sync::Arc;

use crate::controller::Controller;
use crate::routing::{Mount, RouteSet};

/// State injected into every handler.
///
/// Everything here is built once at startup and only read afterwards, so
/// cloning the state per request is a handful of reference-count bumps.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteSet>,
    pub mount: Mount,
    pub controller: Arc<dyn Controller>,
}

impl AppState {
    pub fn new(routes: RouteSet, mount: Mount, controller: Arc<dyn Controller>) -> Self {
        Self {
            routes: Arc::new(routes),
            mount,
            controller,
        }
    }
}
