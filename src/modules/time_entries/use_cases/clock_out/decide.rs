// Pure decision for clock-out and manager corrections.
//
// - The owner, a MANAGER or an ADMIN may close an entry; anyone else is forbidden.
// - end = command end_time or now; accrual is recomputed from the stored start_time every call.
// - Location and budget bucket change only when supplied.
// - A manager or admin touching someone else's entry stamps edited_by_manager_id and edited_at.

use chrono::{DateTime, Utc};

use crate::modules::time_entries::core::accrual::{Rates, accrue};
use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::authorization::{can_mutate_entry, is_manager_correction};
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::core::policy::RateSource;
use crate::modules::time_entries::core::project::BudgetBucket;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::shared::core::primitives::to_millis;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Time entry ID is required")]
    MissingEntryId,

    #[error("Forbidden")]
    NotPermitted,

    #[error("Budget bucket does not belong to project")]
    BucketOutsideProject,
}

impl From<DecideError> for ServiceError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::NotPermitted => ServiceError::Forbidden,
            DecideError::MissingEntryId | DecideError::BucketOutsideProject => {
                ServiceError::Validation(reason.to_string())
            }
        }
    }
}

pub fn require_entry_id(command: &ClockOut) -> Result<&str, DecideError> {
    command.entry_id().ok_or(DecideError::MissingEntryId)
}

pub fn authorize(actor: &User, entry: &TimeEntry) -> Result<(), DecideError> {
    if can_mutate_entry(actor, entry) {
        Ok(())
    } else {
        Err(DecideError::NotPermitted)
    }
}

/// Whose rates price the span.
pub fn pricing_user_id<'a>(
    actor: &'a User,
    entry: &'a TimeEntry,
    rate_source: RateSource,
) -> &'a str {
    match rate_source {
        RateSource::Actor => &actor.id,
        RateSource::Owner => &entry.user_id,
    }
}

pub struct ClockOutContext<'a> {
    pub actor: &'a User,
    pub priced_by: &'a User,
    pub budget_bucket: Option<&'a BudgetBucket>,
}

pub fn decide_clock_out(
    context: ClockOutContext<'_>,
    mut entry: TimeEntry,
    command: &ClockOut,
    now: DateTime<Utc>,
) -> Result<TimeEntry, DecideError> {
    authorize(context.actor, &entry)?;
    if let Some(bucket) = context.budget_bucket {
        if bucket.project_id != entry.project_id {
            return Err(DecideError::BucketOutsideProject);
        }
        entry.budget_bucket_id = Some(bucket.id.clone());
    }

    let now = to_millis(now);
    let end_time = command.end_time.map_or(now, to_millis);
    let accrual = accrue(entry.start_time, end_time, Rates::from(context.priced_by));
    entry.close(end_time, accrual);

    if let Some(latitude) = command.latitude {
        entry.latitude = Some(latitude);
    }
    if let Some(longitude) = command.longitude {
        entry.longitude = Some(longitude);
    }
    if is_manager_correction(context.actor, &entry) {
        entry.edited_by_manager_id = Some(context.actor.id.clone());
        entry.edited_at = Some(now);
    }
    entry.updated_at = now;
    Ok(entry)
}
