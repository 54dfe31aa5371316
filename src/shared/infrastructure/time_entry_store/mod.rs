use async_trait::async_trait;

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::store_error::StoreError;

pub mod in_memory;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryFilter {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

impl TimeEntryFilter {
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        self.user_id.as_deref().is_none_or(|id| entry.user_id == id)
            && self
                .project_id
                .as_deref()
                .is_none_or(|id| entry.project_id == id)
    }
}

/// Persistence for time entries. Single-row writes are atomic; `update` is a
/// compare-and-swap on `TimeEntry::version`.
#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    /// Stores a new entry at version 1 and returns it.
    async fn insert(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError>;

    async fn load(&self, entry_id: &str) -> Result<Option<TimeEntry>, StoreError>;

    /// Replaces the entry if its stored version still equals `expected_version`.
    async fn update(&self, entry: TimeEntry, expected_version: i64)
    -> Result<TimeEntry, StoreError>;

    /// Newest start time first.
    async fn list(&self, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>, StoreError>;

    async fn has_open_entry(&self, user_id: &str) -> Result<bool, StoreError>;
}
