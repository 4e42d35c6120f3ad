//! Routing error types.

use axum::http::Method;

/// Errors raised while recognizing or generating paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// No declared (method, path) combination matches the request.
    #[error("No route matches [{method}] \"{path}\"")]
    RouteNotFound { method: Method, path: String },

    /// Path generation was asked for a route name that is not declared.
    #[error("No route named '{0}'")]
    UnknownRoute(String),

    /// Path generation is missing a value for a pattern parameter.
    #[error("Route '{route}' requires parameter '{param}'")]
    MissingParameter { route: String, param: String },
}

/// Errors raised while compiling a route table.
///
/// A table that could dispatch one request to two routes is rejected here,
/// so recognition never has to arbitrate between candidates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteDefinitionError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Parameter '{param}' appears more than once in '{pattern}'")]
    DuplicateParameter { pattern: String, param: String },

    #[error("Route [{method}] \"{pattern}\" overlaps \"{existing}\"")]
    DuplicateRoute {
        method: Method,
        pattern: String,
        existing: String,
    },

    #[error("Route name '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("Invalid mount path '{path}': {reason}")]
    InvalidMount { path: String, reason: String },
}
