//! Handlers for the `/save-date` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use savedate_core::error::CoreError;
use savedate_core::save_date::{self, SaveDate, SaveDateInput};
use savedate_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/save-date
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SaveDate>>> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// POST /api/save-date
///
/// The body is taken as a `Result` so a malformed payload still produces the
/// standard error envelope instead of axum's plain-text rejection.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<SaveDateInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SuccessResponse<SaveDate>>)> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed save date payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let record = save_date::validate(&input).map_err(|errors| {
        tracing::warn!(fields = ?errors.fields(), "Save date failed validation");
        errors
    })?;

    let created = state.store.create(&record).await?;
    tracing::info!(
        save_date_id = created.id,
        event_times = created.event_times.len(),
        "Save date created"
    );
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(created))))
}

/// GET /api/save-date/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<SaveDate>> {
    let Path(id) = path.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected save date id");
        AppError::BadRequest(rejection.body_text())
    })?;

    let record = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SaveDate",
            id,
        }))?;
    Ok(Json(record))
}
