pub mod health;
pub mod save_date;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /save-date                                       list, create
/// /save-date/                                      list, create (trailing slash)
/// /save-date/{id}                                  get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(save_date::router())
}
