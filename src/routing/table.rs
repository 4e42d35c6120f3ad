//! The engine's route table.
//!
//! Declared as a literal table rather than generated from a resource
//! macro, so every (method, pattern) pair the engine answers is listed here.

use axum::http::Method;

use super::action::Action;
use super::error::RouteDefinitionError;
use super::route_set::{Route, RouteSet};

/// Namespace prefixed to every controller of this engine.
pub const ENGINE_NAMESPACE: &str = "ib";

/// Controller serving the underlyings resource.
pub const CONTROLLER: &str = "underlyings";

/// Builds the routes of the `ib` engine.
///
/// | Verb        | Pattern                  | Action  | Name              |
/// |-------------|--------------------------|---------|-------------------|
/// | GET         | `/`                      | index   | `root`            |
/// | GET         | `/underlyings`           | index   | `underlyings`     |
/// | POST        | `/underlyings`           | create  |                   |
/// | GET         | `/underlyings/new`       | new     | `new_underlying`  |
/// | GET         | `/underlyings/{id}/edit` | edit    | `edit_underlying` |
/// | GET         | `/underlyings/{id}`      | show    | `underlying`      |
/// | PATCH / PUT | `/underlyings/{id}`      | update  |                   |
/// | DELETE      | `/underlyings/{id}`      | destroy |                   |
///
/// # Errors
///
/// Only fails if the table above is edited into an ambiguous state.
pub fn engine_routes() -> Result<RouteSet, RouteDefinitionError> {
    RouteSet::new(
        ENGINE_NAMESPACE,
        vec![
            Route::new(Method::GET, "/", CONTROLLER, Action::Index).named("root"),
            Route::new(Method::GET, "/underlyings", CONTROLLER, Action::Index).named("underlyings"),
            Route::new(Method::POST, "/underlyings", CONTROLLER, Action::Create),
            Route::new(Method::GET, "/underlyings/new", CONTROLLER, Action::New)
                .named("new_underlying"),
            Route::new(Method::GET, "/underlyings/{id}/edit", CONTROLLER, Action::Edit)
                .named("edit_underlying"),
            Route::new(Method::GET, "/underlyings/{id}", CONTROLLER, Action::Show)
                .named("underlying"),
            Route::new(Method::PATCH, "/underlyings/{id}", CONTROLLER, Action::Update),
            Route::new(Method::PUT, "/underlyings/{id}", CONTROLLER, Action::Update),
            Route::new(Method::DELETE, "/underlyings/{id}", CONTROLLER, Action::Destroy),
        ],
    )
}
