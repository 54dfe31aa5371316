use std::sync::Arc;

use crate::modules::time_entries::core::policy::AccrualPolicy;
use crate::modules::time_entries::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::time_entries::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::ListTimeEntriesHandler;
use crate::modules::time_entries::use_cases::resolve_actor::handler::{
    ActorResolver, DirectoryActorResolver,
};
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::shared::infrastructure::sessions::in_memory::InMemorySessionStore;
use crate::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;

#[derive(Clone)]
pub struct AppState {
    pub session_cookie: Arc<str>,
    pub actors: Arc<dyn ActorResolver>,
    pub list_handler: Arc<ListTimeEntriesHandler<InMemoryTimeEntryStore, InMemoryDirectory>>,
    pub clock_in_handler: Arc<ClockInHandler<InMemoryTimeEntryStore, InMemoryDirectory>>,
    pub clock_out_handler: Arc<ClockOutHandler<InMemoryTimeEntryStore, InMemoryDirectory>>,
}

impl AppState {
    pub fn new(
        session_cookie: &str,
        store: Arc<InMemoryTimeEntryStore>,
        directory: Arc<InMemoryDirectory>,
        sessions: Arc<InMemorySessionStore>,
        clock: Arc<dyn Clock>,
        policy: AccrualPolicy,
    ) -> Self {
        Self {
            session_cookie: Arc::from(session_cookie),
            actors: Arc::new(DirectoryActorResolver::new(directory.clone(), sessions)),
            list_handler: Arc::new(ListTimeEntriesHandler::new(
                store.clone(),
                directory.clone(),
            )),
            clock_in_handler: Arc::new(ClockInHandler::new(
                store.clone(),
                directory.clone(),
                clock.clone(),
                policy,
            )),
            clock_out_handler: Arc::new(ClockOutHandler::new(store, directory, clock, policy)),
        }
    }
}
