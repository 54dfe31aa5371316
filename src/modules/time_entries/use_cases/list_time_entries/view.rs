use serde::Serialize;

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::project::{BudgetBucket, Project};
use crate::modules::time_entries::core::time_entry::TimeEntry;

/// A time entry joined with its owner, project and budget bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryView {
    #[serde(flatten)]
    pub entry: TimeEntry,
    pub user: Option<User>,
    pub project: Option<Project>,
    pub budget_bucket: Option<BudgetBucket>,
}
