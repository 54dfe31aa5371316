use chrono::{DateTime, Utc};

/// Request to open a time entry for the calling actor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClockIn {
    pub project_id: Option<String>,
    pub budget_bucket_id: Option<String>,
    /// Defaults to server time.
    pub start_time: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ClockIn {
    /// The project id, treating blank strings as absent.
    pub fn project_id(&self) -> Option<&str> {
        non_blank(self.project_id.as_deref())
    }

    pub fn budget_bucket_id(&self) -> Option<&str> {
        non_blank(self.budget_bucket_id.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
