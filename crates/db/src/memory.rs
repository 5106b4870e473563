//! In-process [`SaveDateStore`] used when no database is configured.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use savedate_core::save_date::{NewSaveDate, SaveDate};
use savedate_core::types::DbId;
use tokio::sync::RwLock;

use crate::store::{SaveDateStore, StoreError};

/// Keeps records in a vector, assigning ids from 1 upward.
#[derive(Debug)]
pub struct MemorySaveDateStore {
    records: RwLock<Vec<SaveDate>>,
    next_id: AtomicI64,
}

impl MemorySaveDateStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemorySaveDateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SaveDateStore for MemorySaveDateStore {
    async fn list(&self) -> Result<Vec<SaveDate>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, input: &NewSaveDate) -> Result<SaveDate, StoreError> {
        input.full_clean().map_err(StoreError::Invalid)?;

        let mut records = self.records.write().await;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = input.clone().with_id(id);
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<SaveDate>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
