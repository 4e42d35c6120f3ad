//! DTOs for dispatch echo and route listing.

use serde::Serialize;

use crate::routing::{Action, Mount, Params, RouteMatch, RouteSet};

/// Recognized dispatch target as returned by the echo controller.
#[derive(Debug, Serialize)]
pub struct RouteMatchResponse {
    pub controller: String,
    pub action: Action,
    pub params: Params,
    /// `controller#action` notation.
    pub target: String,
}

impl From<RouteMatch> for RouteMatchResponse {
    fn from(route: RouteMatch) -> Self {
        let target = route.target();
        Self {
            controller: route.controller,
            action: route.action,
            params: route.params,
            target,
        }
    }
}

/// One declared route, with its path as seen from the host application.
#[derive(Debug, Serialize)]
pub struct RouteItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub method: String,
    pub path: String,
    pub target: String,
}

/// Response listing the engine's route table.
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub mount: String,
    pub items: Vec<RouteItem>,
}

impl RouteListResponse {
    pub fn new(routes: &RouteSet, mount: &Mount) -> Self {
        let items = routes
            .routes()
            .map(|route| RouteItem {
                name: route.name.clone(),
                method: route.method.to_string(),
                path: mount.join(&route.path),
                target: format!("{}#{}", routes.controller_path(&route.controller), route.action),
            })
            .collect();

        Self {
            mount: mount.to_string(),
            items,
        }
    }
}

/// Generated path of a named route, as seen from the host application.
#[derive(Debug, Serialize)]
pub struct RoutePathResponse {
    pub name: String,
    pub path: String,
}
