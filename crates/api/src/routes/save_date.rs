//! Route definitions for save-the-dates.

use axum::routing::get;
use axum::Router;

use crate::handlers::{fallback, save_date};
use crate::state::AppState;

/// Save-the-date routes, merged into `/api`.
///
/// ```text
/// GET    /save-date         -> list
/// POST   /save-date         -> create
/// GET    /save-date/        -> list
/// POST   /save-date/        -> create
/// GET    /save-date/{id}    -> get_by_id
/// ```
///
/// Any other method on these paths answers 405 in the error envelope.
pub fn router() -> Router<AppState> {
    let collection = || {
        get(save_date::list)
            .post(save_date::create)
            .fallback(fallback::method_not_allowed)
    };

    Router::new()
        .route("/save-date", collection())
        .route("/save-date/", collection())
        .route(
            "/save-date/{id}",
            get(save_date::get_by_id).fallback(fallback::method_not_allowed),
        )
}
