// In memory implementation of the TimeEntryStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep entries keyed by id.
// - Enforce optimistic concurrency by checking the expected version on update.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::store_error::StoreError;
use crate::shared::infrastructure::time_entry_store::{TimeEntryFilter, TimeEntryStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    entries: RwLock<HashMap<String, TimeEntry>>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before taking the write lock so concurrent updates can interleave.
    pub fn set_delay_update_ms(&self, millis: u64) {
        self.delay_update_ms.store(millis, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn insert(&self, mut entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        self.ensure_online()?;
        entry.version = 1;
        let mut guard = self.entries.write().await;
        guard.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn load(&self, entry_id: &str) -> Result<Option<TimeEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self.entries.read().await.get(entry_id).cloned())
    }

    async fn update(
        &self,
        mut entry: TimeEntry,
        expected_version: i64,
    ) -> Result<TimeEntry, StoreError> {
        self.ensure_online()?;
        let delay = self.delay_update_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.entries.write().await;
        let stored = guard
            .get_mut(&entry.id)
            .ok_or_else(|| StoreError::Missing("Time entry not found".into()))?;
        if stored.version != expected_version {
            return Err(StoreError::VersionMismatch {
                expected: expected_version,
                actual: stored.version,
            });
        }
        entry.version = expected_version + 1;
        *stored = entry.clone();
        Ok(entry)
    }

    async fn list(&self, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.start_time
                .cmp(&a.start_time)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items)
    }

    async fn has_open_entry(&self, user_id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .values()
            .any(|entry| entry.user_id == user_id && entry.is_open()))
    }
}
