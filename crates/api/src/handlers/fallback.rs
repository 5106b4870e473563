//! Fallbacks that keep unmatched requests inside the error envelope.

use crate::error::AppError;

/// Router-level fallback for paths with no route.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Method-level fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
