use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use std::sync::Mutex;
use uuid::Uuid;

/// Source of "now" for everything that stamps or measures time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        to_millis(Utc::now())
    }
}

/// Clock pinned to an instant; tests move it forward explicitly.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().unwrap_or_else(|p| p.into_inner()) = instant;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut guard = self.instant.lock().unwrap_or_else(|p| p.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(|p| p.into_inner())
    }
}

/// Stored and reported instants carry millisecond precision.
pub fn to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(3)
}

/// RFC 3339 in UTC with exactly three fractional digits, e.g. `2025-03-10T07:00:00.000Z`.
pub fn format_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` helpers writing instants through [`format_millis`].
pub mod millis {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        instant: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_millis(*instant))
    }

    pub fn serialize_option<S: Serializer>(
        instant: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match instant {
            Some(instant) => serialize(instant, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Time-ordered identifier for new records.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}
