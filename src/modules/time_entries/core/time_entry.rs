// A single clock-in/clock-out record.
//
// Lifecycle
// - OPEN after clock-in: end_time and the derived accrual fields are None.
// - CLOSED after the first clock-out. Later corrections recompute from the original start_time.
// - Nothing moves an entry back to OPEN.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::accrual::Accrual;
use crate::shared::core::primitives::millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub budget_bucket_id: Option<String>,
    #[serde(serialize_with = "millis::serialize")]
    pub start_time: DateTime<Utc>,
    #[serde(serialize_with = "millis::serialize_option")]
    pub end_time: Option<DateTime<Utc>>,
    pub duration_hours: Option<f64>,
    pub labor_cost: Option<f64>,
    pub burden_cost: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub edited_by_manager_id: Option<String>,
    #[serde(serialize_with = "millis::serialize_option")]
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "millis::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "millis::serialize")]
    pub updated_at: DateTime<Utc>,
    /// Store-managed write counter used for optimistic concurrency.
    #[serde(skip)]
    pub version: i64,
}

impl TimeEntry {
    pub fn status(&self) -> EntryStatus {
        match self.end_time {
            None => EntryStatus::Open,
            Some(_) => EntryStatus::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status() == EntryStatus::Open
    }

    /// Overwrites the closing fields; corrections are not additive.
    pub fn close(&mut self, end_time: DateTime<Utc>, accrual: Accrual) {
        self.end_time = Some(end_time);
        self.duration_hours = Some(accrual.duration_hours);
        self.labor_cost = Some(accrual.labor_cost);
        self.burden_cost = Some(accrual.burden_cost);
    }
}
