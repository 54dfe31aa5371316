use chrono::{DateTime, TimeZone, Utc};

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::tests::fixtures::directory::PROJECT_ID;

/// 2025-03-10T07:00:00Z, a Monday morning shift start.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 7, 0, 0).unwrap()
}

/// An OPEN entry on project-0001 started at `t0`, not yet persisted (version 0).
pub fn open_entry(id: &str, user_id: &str) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        user_id: user_id.to_string(),
        project_id: PROJECT_ID.to_string(),
        budget_bucket_id: None,
        start_time: t0(),
        end_time: None,
        duration_hours: None,
        labor_cost: None,
        burden_cost: None,
        latitude: None,
        longitude: None,
        edited_by_manager_id: None,
        edited_at: None,
        created_at: t0(),
        updated_at: t0(),
        version: 0,
    }
}
