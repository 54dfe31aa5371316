use chrono::{DateTime, Utc};

use crate::modules::time_entries::core::actor::User;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Per-hour wage and overhead used to price a span of work. Unset rates count as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rates {
    pub hourly: f64,
    pub burden: f64,
}

impl From<&User> for Rates {
    fn from(user: &User) -> Self {
        Self {
            hourly: user.hourly_rate.unwrap_or(0.0),
            burden: user.burden_rate.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accrual {
    pub duration_hours: f64,
    pub labor_cost: f64,
    pub burden_cost: f64,
}

/// Elapsed hours between two instants, clamped at zero for clock skew.
pub fn duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let millis = (end - start).num_milliseconds();
    (millis as f64 / MILLIS_PER_HOUR).max(0.0)
}

pub fn accrue(start: DateTime<Utc>, end: DateTime<Utc>, rates: Rates) -> Accrual {
    let duration_hours = duration_hours(start, end);
    Accrual {
        duration_hours,
        labor_cost: duration_hours * rates.hourly,
        burden_cost: duration_hours * rates.burden,
    }
}
