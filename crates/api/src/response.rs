//! Shared response envelope types for API handlers.
//!
//! Successful writes answer with `{ "status": "success", "data": ... }`; the
//! matching error envelope is produced by [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{ "status": "success", "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(SuccessResponse::new(record))))
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}
