use std::sync::Arc;

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::core::policy::AccrualPolicy;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::clock_out::decide::{
    ClockOutContext, authorize, decide_clock_out, pricing_user_id, require_entry_id,
};
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

pub struct ClockOutHandler<TStore, TDirectory>
where
    TStore: TimeEntryStore + 'static,
    TDirectory: Directory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    clock: Arc<dyn Clock>,
    policy: AccrualPolicy,
}

impl<TStore, TDirectory> ClockOutHandler<TStore, TDirectory>
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

    pub async fn handle(&self, actor: &User, command: ClockOut) -> Result<TimeEntry, ServiceError> {
        let entry_id = require_entry_id(&command)?;
        let entry = self
            .store
            .load(entry_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Time entry not found"))?;

        authorize(actor, &entry).inspect_err(|_| {
            tracing::warn!(
                entry_id = %entry.id,
                user_id = %actor.id,
                owner_id = %entry.user_id,
                "clock-out forbidden"
            );
        })?;

        let budget_bucket = match command.budget_bucket_id() {
            Some(bucket_id) => Some(
                self.directory
                    .budget_bucket_by_id(bucket_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Budget bucket not found"))?,
            ),
            None => None,
        };

        let owner;
        let priced_by = if pricing_user_id(actor, &entry, self.policy.rate_source) == actor.id {
            actor
        } else {
            owner = self.directory.user_by_id(&entry.user_id).await?.ok_or_else(|| {
                ServiceError::Internal(format!("owner {} of entry {} is missing", entry.user_id, entry.id))
            })?;
            &owner
        };

        let expected_version = entry.version;
        let context = ClockOutContext {
            actor,
            priced_by,
            budget_bucket: budget_bucket.as_ref(),
        };
        let closed = decide_clock_out(context, entry, &command, self.clock.now())?;

        let closed = self
            .store
            .update(closed, expected_version)
            .await
            .inspect_err(|error| {
                tracing::warn!(entry_id, %error, "clock-out write failed");
            })?;
        tracing::info!(
            entry_id = %closed.id,
            user_id = %closed.user_id,
            edited_by_manager_id = ?closed.edited_by_manager_id,
            duration_hours = ?closed.duration_hours,
            "clocked out"
        );
        Ok(closed)
    }
}
