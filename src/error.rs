//! HTTP-facing error type.
//!
//! Every error leaves the engine as a JSON body:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "not_found",
//!     "message": "No route matches [GET] \"/underlyings/1/bogus\"",
//!     "details": { "method": "GET", "path": "/underlyings/1/bogus" }
//!   }
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::routing::RoutingError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        match &e {
            RoutingError::RouteNotFound { method, path } => AppError::not_found(
                e.to_string(),
                json!({ "method": method.as_str(), "path": path }),
            ),
            RoutingError::UnknownRoute(name) => {
                AppError::not_found(e.to_string(), json!({ "route": name }))
            }
            RoutingError::MissingParameter { route, param } => AppError::bad_request(
                e.to_string(),
                json!({ "route": route, "param": param }),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[test]
    fn test_route_not_found_maps_to_404() {
        let err = AppError::from(RoutingError::RouteNotFound {
            method: Method::TRACE,
            path: "/underlyings".to_string(),
        });

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "No route matches [TRACE] \"/underlyings\"");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_parameter_maps_to_400() {
        let err = AppError::from(RoutingError::MissingParameter {
            route: "underlying".to_string(),
            param: "id".to_string(),
        });

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
