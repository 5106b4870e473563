//! Row mapping for the `save_dates` table.

use sqlx::FromRow;
use savedate_core::save_date::{EventTimes, SaveDate};
use savedate_core::types::DbId;

/// A row from the `save_dates` table.
#[derive(Debug, Clone, FromRow)]
pub struct SaveDateRow {
    pub id: DbId,
    pub title: String,
    pub event_subtitle: String,
    pub event_summary: String,
    #[sqlx(json)]
    pub event_times: EventTimes,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
}

impl From<SaveDateRow> for SaveDate {
    fn from(row: SaveDateRow) -> Self {
        SaveDate {
            id: row.id,
            title: row.title,
            event_subtitle: row.event_subtitle,
            event_summary: row.event_summary,
            event_times: row.event_times,
            event_venue: row.event_venue,
            event_address: row.event_address,
            event_city: row.event_city,
        }
    }
}
