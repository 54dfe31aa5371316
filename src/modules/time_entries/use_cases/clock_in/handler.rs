use std::sync::Arc;

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::core::policy::AccrualPolicy;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::modules::time_entries::use_cases::clock_in::decide::{
    ClockInContext, decide_clock_in, require_project_id,
};
use crate::shared::core::primitives::{Clock, new_id};
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

pub struct ClockInHandler<TStore, TDirectory>
where
    TStore: TimeEntryStore + 'static,
    TDirectory: Directory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    clock: Arc<dyn Clock>,
    policy: AccrualPolicy,
}

impl<TStore, TDirectory> ClockInHandler<TStore, TDirectory>
where
    TStore: TimeEntryStore + 'static,
    TDirectory: Directory + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        directory: Arc<TDirectory>,
        clock: Arc<dyn Clock>,
        policy: AccrualPolicy,
    ) -> Self {
        Self {
            store,
            directory,
            clock,
            policy,
        }
    }

    pub async fn handle(&self, actor: &User, command: ClockIn) -> Result<TimeEntry, ServiceError> {
        let project_id = require_project_id(&command)?;
        let project = self
            .directory
            .project_by_id(project_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project not found"))?;

        let budget_bucket = match command.budget_bucket_id() {
            Some(bucket_id) => Some(
                self.directory
                    .budget_bucket_by_id(bucket_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Budget bucket not found"))?,
            ),
            None => None,
        };

        let has_open_entry = if self.policy.allow_concurrent_open_entries {
            false
        } else {
            self.store.has_open_entry(&actor.id).await?
        };

        let context = ClockInContext {
            actor,
            project: &project,
            budget_bucket: budget_bucket.as_ref(),
            has_open_entry,
            policy: &self.policy,
        };
        let entry = decide_clock_in(context, command, new_id(), self.clock.now())
            .inspect_err(|reason| {
                tracing::warn!(user_id = %actor.id, project_id = %project.id, %reason, "clock-in rejected");
            })?;

        let entry = self.store.insert(entry).await?;
        tracing::info!(
            entry_id = %entry.id,
            user_id = %entry.user_id,
            project_id = %entry.project_id,
            "clocked in"
        );
        Ok(entry)
    }
}
