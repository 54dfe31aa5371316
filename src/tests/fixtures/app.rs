// Fully wired application over the fixture directory, an in-memory store and a fixed clock at t0.

use axum::Router;
use std::sync::Arc;

use crate::modules::time_entries::core::policy::AccrualPolicy;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::resolve_actor::credentials::DEFAULT_SESSION_COOKIE;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;
use crate::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::directory::{fixture_directory, fixture_sessions};
use crate::tests::fixtures::entries::t0;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryTimeEntryStore>,
    pub directory: Arc<InMemoryDirectory>,
    pub clock: Arc<FixedClock>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::build(InMemoryTimeEntryStore::new(), AccrualPolicy::default())
    }

    pub fn with_policy(policy: AccrualPolicy) -> Self {
        Self::build(InMemoryTimeEntryStore::new(), policy)
    }

    pub fn offline_store() -> Self {
        let mut store = InMemoryTimeEntryStore::new();
        store.toggle_offline();
        Self::build(store, AccrualPolicy::default())
    }

    fn build(store: InMemoryTimeEntryStore, policy: AccrualPolicy) -> Self {
        let store = Arc::new(store);
        let directory = Arc::new(fixture_directory());
        let clock = Arc::new(FixedClock::new(t0()));
        let state = AppState::new(
            DEFAULT_SESSION_COOKIE,
            store.clone(),
            directory.clone(),
            Arc::new(fixture_sessions()),
            clock.clone(),
            policy,
        );
        Self {
            state,
            store,
            directory,
            clock,
        }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    pub async fn seed(&self, entry: TimeEntry) -> TimeEntry {
        self.store.insert(entry).await.expect("seed failed")
    }
}
