//! Repository for the `save_dates` table.

use sqlx::PgPool;
use savedate_core::save_date::NewSaveDate;
use savedate_core::types::DbId;

use crate::models::save_date::SaveDateRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, event_subtitle, event_summary, event_times, \
                       event_venue, event_address, event_city";

/// Provides create and read operations for save-the-dates.
pub struct SaveDateRepo;

impl SaveDateRepo {
    /// Insert a new save-the-date, returning the created row.
    ///
    /// `event_times_json` is the serialized time map; it is bound as text and
    /// cast so key order survives.
    pub async fn create(
        pool: &PgPool,
        input: &NewSaveDate,
        event_times_json: &str,
    ) -> Result<SaveDateRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO save_dates
                (title, event_subtitle, event_summary, event_times, event_venue, event_address, event_city)
             VALUES ($1, $2, $3, $4::json, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SaveDateRow>(&query)
            .bind(&input.title)
            .bind(&input.event_subtitle)
            .bind(&input.event_summary)
            .bind(event_times_json)
            .bind(&input.event_venue)
            .bind(&input.event_address)
            .bind(&input.event_city)
            .fetch_one(pool)
            .await
    }

    /// Find a save-the-date by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SaveDateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM save_dates WHERE id = $1");
        sqlx::query_as::<_, SaveDateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all save-the-dates in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SaveDateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM save_dates ORDER BY id ASC");
        sqlx::query_as::<_, SaveDateRow>(&query).fetch_all(pool).await
    }
}
