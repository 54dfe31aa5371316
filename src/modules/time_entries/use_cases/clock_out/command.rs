use chrono::{DateTime, Utc};

use crate::modules::time_entries::use_cases::clock_in::command::non_blank;

/// Closes an entry, or re-closes it as a correction. Omitted optionals leave stored values alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClockOut {
    pub entry_id: Option<String>,
    /// Defaults to server time.
    pub end_time: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub budget_bucket_id: Option<String>,
}

impl ClockOut {
    pub fn entry_id(&self) -> Option<&str> {
        non_blank(self.entry_id.as_deref())
    }

    pub fn budget_bucket_id(&self) -> Option<&str> {
        non_blank(self.budget_bucket_id.as_deref())
    }
}
