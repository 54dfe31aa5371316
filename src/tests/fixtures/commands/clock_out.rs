// Shared test fixture for the ClockOut command. Only the entry id is set by default.

use chrono::{DateTime, Utc};

use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;

pub struct ClockOutBuilder {
    inner: ClockOut,
}

#[allow(dead_code)]
impl ClockOutBuilder {
    pub fn new(entry_id: impl Into<String>) -> Self {
        Self {
            inner: ClockOut {
                entry_id: Some(entry_id.into()),
                ..ClockOut::default()
            },
        }
    }

    pub fn end_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_time = Some(v);
        self
    }

    pub fn latitude(mut self, v: f64) -> Self {
        self.inner.latitude = Some(v);
        self
    }

    pub fn longitude(mut self, v: f64) -> Self {
        self.inner.longitude = Some(v);
        self
    }

    pub fn budget_bucket_id(mut self, v: impl Into<String>) -> Self {
        self.inner.budget_bucket_id = Some(v.into());
        self
    }

    pub fn build(self) -> ClockOut {
        self.inner
    }
}
