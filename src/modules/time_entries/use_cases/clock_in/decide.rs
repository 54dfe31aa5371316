// Pure decision for clock-in.
//
// - A project id is required.
// - With crew enforcement on, only crew members (or managers/admins) may log on a crewed project.
// - A budget bucket must belong to the same project.
// - With concurrent open entries disallowed, an actor holding an OPEN entry is refused.
// - Never performs input or output.

use chrono::{DateTime, Utc};

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::authorization::can_log_time_on;
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::core::policy::AccrualPolicy;
use crate::modules::time_entries::core::project::{BudgetBucket, Project};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::shared::core::primitives::to_millis;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Project ID is required")]
    MissingProjectId,

    #[error("Forbidden")]
    NotOnCrew,

    #[error("Budget bucket does not belong to project")]
    BucketOutsideProject,

    #[error("An open time entry already exists")]
    AlreadyClockedIn,
}

impl From<DecideError> for ServiceError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::MissingProjectId | DecideError::BucketOutsideProject => {
                ServiceError::Validation(reason.to_string())
            }
            DecideError::NotOnCrew => ServiceError::Forbidden,
            DecideError::AlreadyClockedIn => ServiceError::Conflict(reason.to_string()),
        }
    }
}

pub struct ClockInContext<'a> {
    pub actor: &'a User,
    pub project: &'a Project,
    pub budget_bucket: Option<&'a BudgetBucket>,
    pub has_open_entry: bool,
    pub policy: &'a AccrualPolicy,
}

pub fn require_project_id(command: &ClockIn) -> Result<&str, DecideError> {
    command.project_id().ok_or(DecideError::MissingProjectId)
}

pub fn decide_clock_in(
    context: ClockInContext<'_>,
    command: ClockIn,
    entry_id: String,
    now: DateTime<Utc>,
) -> Result<TimeEntry, DecideError> {
    if !can_log_time_on(context.actor, context.project, context.policy) {
        return Err(DecideError::NotOnCrew);
    }
    if let Some(bucket) = context.budget_bucket {
        if bucket.project_id != context.project.id {
            return Err(DecideError::BucketOutsideProject);
        }
    }
    if context.has_open_entry && !context.policy.allow_concurrent_open_entries {
        return Err(DecideError::AlreadyClockedIn);
    }

    let now = to_millis(now);

    Ok(TimeEntry {
        id: entry_id,
        user_id: context.actor.id.clone(),
        project_id: context.project.id.clone(),
        budget_bucket_id: context.budget_bucket.map(|b| b.id.clone()),
        start_time: command.start_time.map_or(now, to_millis),
        end_time: None,
        duration_hours: None,
        labor_cost: None,
        burden_cost: None,
        latitude: command.latitude,
        longitude: command.longitude,
        edited_by_manager_id: None,
        edited_at: None,
        created_at: now,
        updated_at: now,
        version: 0,
    })
}
