//! Integration tests for the PostgreSQL save-the-date store.
//!
//! These need a live database (`DATABASE_URL`), so they are ignored by
//! default. Run with `cargo test -p savedate-db -- --ignored`.

use assert_matches::assert_matches;
use savedate_core::save_date::{validate, EventTimeEntry, NewSaveDate, SaveDateInput};
use savedate_db::{PgSaveDateStore, SaveDateStore, StoreError};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_save_date(title: &str, times: &[(&str, &str)]) -> NewSaveDate {
    validate(&SaveDateInput {
        title: title.to_string(),
        event_subtitle: "Test Subtitle".to_string(),
        event_summary: "Test summary with more than ten characters".to_string(),
        event_times: times
            .iter()
            .map(|(label, time)| EventTimeEntry::new(*label, *time))
            .collect(),
        event_venue: "Central Hall".to_string(),
        event_address: "Example Street, 123".to_string(),
        event_city: "São Paulo".to_string(),
    })
    .expect("valid input")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_on_empty_table_is_empty(pool: PgPool) {
    let store = PgSaveDateStore::new(pool);
    assert!(store.list().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_then_read_back_keeps_time_order(pool: PgPool) {
    let store = PgSaveDateStore::new(pool);
    let input = new_save_date(
        "My Event",
        &[("Party", "20:00"), ("Ceremony", "18:00"), ("Brunch", "11:00")],
    );

    let created = store.create(&input).await.unwrap();
    assert!(created.id > 0);

    let found = store.find_by_id(created.id).await.unwrap().unwrap();
    let found_order: Vec<_> = found.event_times.keys().collect();
    assert_eq!(found_order, vec!["Party", "Ceremony", "Brunch"]);
    assert_eq!(found.event_times, input.event_times);
    assert_eq!(found.event_city, "São Paulo");

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], found);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn find_by_id_missing_returns_none(pool: PgPool) {
    let store = PgSaveDateStore::new(pool);
    assert!(store.find_by_id(12345).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_refuses_invalid_record(pool: PgPool) {
    let store = PgSaveDateStore::new(pool);
    let mut input = new_save_date("My Event", &[("Ceremony", "18:00")]);
    input.title = "Hi".to_string();

    let err = store.create(&input).await.unwrap_err();
    assert_matches!(err, StoreError::Invalid(_));
    assert!(store.list().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn health_check_passes(pool: PgPool) {
    let store = PgSaveDateStore::new(pool);
    store.health_check().await.unwrap();
}
