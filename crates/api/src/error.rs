use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use savedate_core::error::{CoreError, FieldErrors};
use savedate_db::StoreError;
use serde_json::{json, Value};

/// Key used for errors that are not tied to a single input field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence,
/// and adds HTTP-specific variants. Implements [`IntoResponse`] to produce
/// the `{ "status": "error", "code": ..., "errors": {...} }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `savedate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from `savedate_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request ran past the configured timeout.
    #[error("Request timed out")]
    Timeout,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Core(CoreError::Validation(errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, errors) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    non_field(format!("{entity} with id {id} not found")),
                ),
                CoreError::Validation(errors) => validation(errors),
            },

            // --- Store errors ---
            AppError::Store(store) => match store {
                StoreError::Invalid(errors) => validation(errors),
                StoreError::Database(err) => classify_sqlx_error(err),
                StoreError::Encoding(err) => {
                    tracing::error!(error = %err, "Failed to encode record for storage");
                    internal()
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", non_field(msg)),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                non_field("Route not found"),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                non_field("Method not allowed"),
            ),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                non_field("Request timed out"),
            ),
        };

        let body = json!({
            "status": "error",
            "code": code,
            "errors": errors,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn non_field(message: impl Into<String>) -> Value {
    json!({ NON_FIELD_ERRORS: [message.into()] })
}

fn validation(errors: &FieldErrors) -> (StatusCode, &'static str, Value) {
    (
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        serde_json::to_value(errors).unwrap_or_else(|_| non_field(errors.to_string())),
    )
}

fn internal() -> (StatusCode, &'static str, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        non_field("An internal error occurred"),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and error body.
///
/// - `RowNotFound` maps to 404.
/// - CHECK constraint violations (SQLSTATE `23514`) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, Value) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            non_field("Resource not found"),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23514") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                non_field(format!("Value violates check constraint: {constraint}")),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
