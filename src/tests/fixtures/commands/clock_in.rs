// Shared test fixture for the ClockIn command.
// Defaults come from json/clock_in.json: project-0001 at 2025-03-10T07:00:00Z, no bucket, no location.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;

const CLOCK_IN_FIXTURE_PATH: &str = "./src/tests/fixtures/commands/json/clock_in.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInDto {
    pub project_id: Option<String>,
    pub budget_bucket_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub struct ClockInBuilder {
    inner: ClockIn,
}

impl Default for ClockInBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClockInBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(CLOCK_IN_FIXTURE_PATH).unwrap();
        let dto: ClockInDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: ClockIn {
                project_id: dto.project_id,
                budget_bucket_id: dto.budget_bucket_id,
                start_time: dto.start_time,
                latitude: dto.latitude,
                longitude: dto.longitude,
            },
        }
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = Some(v.into());
        self
    }

    pub fn no_project_id(mut self) -> Self {
        self.inner.project_id = None;
        self
    }

    pub fn budget_bucket_id(mut self, v: impl Into<String>) -> Self {
        self.inner.budget_bucket_id = Some(v.into());
        self
    }

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = Some(v);
        self
    }

    pub fn no_start_time(mut self) -> Self {
        self.inner.start_time = None;
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

    pub fn build(self) -> ClockIn {
        self.inner
    }
}

#[cfg(test)]
mod clock_in_builder_tests {
    use super::*;
    use crate::tests::fixtures::entries::t0;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ClockInBuilder::default().build();
        assert_eq!(built.project_id.as_deref(), Some("project-0001"));
        assert_eq!(built.budget_bucket_id, None);
        assert_eq!(built.start_time, Some(t0()));
        assert_eq!(built.latitude, None);
        assert_eq!(built.longitude, None);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = ClockInBuilder::new()
            .project_id("p-9")
            .budget_bucket_id("b-9")
            .no_start_time()
            .latitude(1.5)
            .longitude(-2.5)
            .build();

        assert_eq!(custom.project_id.as_deref(), Some("p-9"));
        assert_eq!(custom.budget_bucket_id.as_deref(), Some("b-9"));
        assert_eq!(custom.start_time, None);
        assert_eq!(custom.latitude, Some(1.5));
        assert_eq!(custom.longitude, Some(-2.5));
    }
}
