//! Compiled route table: recognition and path generation.

use axum::http::Method;
use serde::Serialize;

use super::action::Action;
use super::error::{RouteDefinitionError, RoutingError};
use super::pattern::{Params, Pattern, split_path};

/// One row of a declarative route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub controller: String,
    pub action: Action,
    /// Route helper name used by [`RouteSet::path_for`].
    pub name: Option<String>,
}

impl Route {
    pub fn new(
        method: Method,
        path: impl Into<String>,
        controller: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            controller: controller.into(),
            action,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Dispatch target produced by a successful recognition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Namespaced controller path, e.g. `ib/underlyings`.
    pub controller: String,
    pub action: Action,
    pub params: Params,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// `controller#action` notation, e.g. `ib/underlyings#edit`.
    pub fn target(&self) -> String {
        format!("{}#{}", self.controller, self.action)
    }
}

#[derive(Debug)]
struct CompiledRoute {
    route: Route,
    pattern: Pattern,
}

/// Immutable, compiled route table for one engine namespace.
///
/// Routes are kept in declaration order for listing, and tried in
/// specificity order (literal segments before parameters) for recognition.
/// Construction rejects overlapping routes, so the first match is the only
/// match that could win.
#[derive(Debug)]
pub struct RouteSet {
    namespace: String,
    routes: Vec<CompiledRoute>,
    match_order: Vec<usize>,
}

impl RouteSet {
    /// Compiles a route table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteDefinitionError`] if a pattern is malformed, two routes
    /// share a method and an equivalent pattern, or a route name is reused.
    pub fn new(
        namespace: impl Into<String>,
        routes: Vec<Route>,
    ) -> Result<Self, RouteDefinitionError> {
        let mut compiled: Vec<CompiledRoute> = Vec::with_capacity(routes.len());

        for route in routes {
            let pattern = Pattern::parse(&route.path)?;

            if let Some(existing) = compiled
                .iter()
                .find(|c| c.route.method == route.method && c.pattern.same_shape(&pattern))
            {
                return Err(RouteDefinitionError::DuplicateRoute {
                    method: route.method.clone(),
                    pattern: route.path.clone(),
                    existing: existing.route.path.clone(),
                });
            }

            if let Some(name) = &route.name
                && compiled
                    .iter()
                    .any(|c| c.route.name.as_deref() == Some(name.as_str()))
            {
                return Err(RouteDefinitionError::DuplicateName(name.clone()));
            }

            compiled.push(CompiledRoute { route, pattern });
        }

        let mut match_order: Vec<usize> = (0..compiled.len()).collect();
        match_order.sort_by_key(|&i| compiled[i].pattern.specificity());

        Ok(Self {
            namespace: namespace.into(),
            routes: compiled,
            match_order,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|c| &c.route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Controller path qualified with the engine namespace.
    pub fn controller_path(&self, controller: &str) -> String {
        if self.namespace.is_empty() {
            controller.to_string()
        } else {
            format!("{}/{}", self.namespace, controller)
        }
    }

    /// Resolves a request to its dispatch target.
    ///
    /// `path` is relative to the engine mount point.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::RouteNotFound`] if no route matches.
    pub fn recognize(&self, method: &Method, path: &str) -> Result<RouteMatch, RoutingError> {
        let not_found = || RoutingError::RouteNotFound {
            method: method.clone(),
            path: path.to_string(),
        };

        let segments = split_path(path).ok_or_else(not_found)?;

        self.match_order
            .iter()
            .map(|&i| &self.routes[i])
            .filter(|c| c.route.method == *method)
            .find_map(|c| {
                c.pattern.matches(&segments).map(|params| RouteMatch {
                    controller: self.controller_path(&c.route.controller),
                    action: c.route.action,
                    params,
                })
            })
            .ok_or_else(not_found)
    }

    /// Generates the engine-relative path of a named route.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownRoute`] if no route has that name.
    /// Returns [`RoutingError::MissingParameter`] if a pattern parameter has
    /// no non-empty value in `params`.
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String, RoutingError> {
        let compiled = self
            .routes
            .iter()
            .find(|c| c.route.name.as_deref() == Some(name))
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;

        compiled
            .pattern
            .interpolate(params)
            .map_err(|param| RoutingError::MissingParameter {
                route: name.to_string(),
                param,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(method: Method, path: &str, action: Action) -> Route {
        Route::new(method, path, "widgets", action)
    }

    #[test]
    fn test_declaration_order_does_not_affect_precedence() {
        // Parametric route declared first still loses to the literal one.
        let routes = RouteSet::new(
            "",
            vec![
                route(Method::GET, "/widgets/{id}", Action::Show),
                route(Method::GET, "/widgets/new", Action::New),
            ],
        )
        .unwrap();

        let found = routes.recognize(&Method::GET, "/widgets/new").unwrap();
        assert_eq!(found.action, Action::New);
        assert!(found.params.is_empty());

        let found = routes.recognize(&Method::GET, "/widgets/7").unwrap();
        assert_eq!(found.action, Action::Show);
        assert_eq!(found.param("id"), Some("7"));
    }

    #[test]
    fn test_leftmost_literal_wins() {
        let routes = RouteSet::new(
            "",
            vec![
                route(Method::GET, "/{kind}/edit", Action::Edit),
                route(Method::GET, "/widgets/{id}", Action::Show),
            ],
        )
        .unwrap();

        let found = routes.recognize(&Method::GET, "/widgets/edit").unwrap();
        assert_eq!(found.action, Action::Show);
        assert_eq!(found.param("id"), Some("edit"));
    }

    #[test]
    fn test_rejects_overlapping_routes() {
        let err = RouteSet::new(
            "",
            vec![
                route(Method::GET, "/widgets/{id}", Action::Show),
                route(Method::GET, "/widgets/{slug}", Action::Edit),
            ],
        )
        .unwrap_err();

        assert!(matches!(err, RouteDefinitionError::DuplicateRoute { .. }));
    }

    #[test]
    fn test_same_pattern_under_different_methods_is_allowed() {
        let routes = RouteSet::new(
            "",
            vec![
                route(Method::GET, "/widgets/{id}", Action::Show),
                route(Method::DELETE, "/widgets/{id}", Action::Destroy),
            ],
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = RouteSet::new(
            "",
            vec![
                route(Method::GET, "/widgets", Action::Index).named("widgets"),
                route(Method::GET, "/", Action::Index).named("widgets"),
            ],
        )
        .unwrap_err();

        assert_eq!(err, RouteDefinitionError::DuplicateName("widgets".to_string()));
    }

    #[test]
    fn test_controller_path_without_namespace() {
        let routes =
            RouteSet::new("", vec![route(Method::GET, "/widgets", Action::Index)]).unwrap();
        let found = routes.recognize(&Method::GET, "/widgets").unwrap();
        assert_eq!(found.controller, "widgets");
        assert_eq!(found.target(), "widgets#index");
    }

    #[test]
    fn test_path_for_errors() {
        let routes = RouteSet::new(
            "",
            vec![route(Method::GET, "/widgets/{id}", Action::Show).named("widget")],
        )
        .unwrap();

        assert_eq!(
            routes.path_for("gadget", &Params::new()).unwrap_err(),
            RoutingError::UnknownRoute("gadget".to_string())
        );
        assert_eq!(
            routes.path_for("widget", &Params::new()).unwrap_err(),
            RoutingError::MissingParameter {
                route: "widget".to_string(),
                param: "id".to_string(),
            }
        );
    }

    #[test]
    fn test_not_found_message() {
        let routes = RouteSet::new("", vec![]).unwrap();
        let err = routes.recognize(&Method::GET, "/widgets").unwrap_err();
        assert_eq!(err.to_string(), "No route matches [GET] \"/widgets\"");
    }
}
