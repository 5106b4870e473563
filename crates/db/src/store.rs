//! Storage interface for save-the-dates.
//!
//! Handlers only see [`SaveDateStore`]; the server picks
//! [`PgSaveDateStore`] when a database is configured and
//! [`crate::MemorySaveDateStore`] otherwise.

use async_trait::async_trait;
use savedate_core::error::FieldErrors;
use savedate_core::save_date::{NewSaveDate, SaveDate};
use savedate_core::types::DbId;

use crate::repositories::SaveDateRepo;
use crate::DbPool;

/// Errors raised by a [`SaveDateStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record failed model-level validation and was not stored.
    #[error("Refusing to store invalid record: {0}")]
    Invalid(FieldErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode event times: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Persistence for save-the-dates.
#[async_trait]
pub trait SaveDateStore: Send + Sync {
    /// All stored records in creation order.
    async fn list(&self) -> Result<Vec<SaveDate>, StoreError>;

    /// Validate and persist a record, returning it with its assigned id.
    async fn create(&self, input: &NewSaveDate) -> Result<SaveDate, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<SaveDate>, StoreError>;

    /// Confirm the backing storage is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`SaveDateStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgSaveDateStore {
    pool: DbPool,
}

impl PgSaveDateStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaveDateStore for PgSaveDateStore {
    async fn list(&self) -> Result<Vec<SaveDate>, StoreError> {
        let rows = SaveDateRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(SaveDate::from).collect())
    }

    async fn create(&self, input: &NewSaveDate) -> Result<SaveDate, StoreError> {
        input.full_clean().map_err(StoreError::Invalid)?;
        let event_times_json = serde_json::to_string(&input.event_times)?;
        let row = SaveDateRepo::create(&self.pool, input, &event_times_json).await?;
        tracing::debug!(save_date_id = row.id, "Inserted save date row");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<SaveDate>, StoreError> {
        let row = SaveDateRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(SaveDate::from))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
