use std::str::FromStr;

/// Whose rates price a clock-out.
///
/// `Actor` prices with the rates of whoever performs the clock-out, so a manager correcting an
/// employee's entry applies the manager's rates. `Owner` always prices with the entry owner's
/// rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateSource {
    #[default]
    Actor,
    Owner,
}

impl FromStr for RateSource {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "actor" => Ok(RateSource::Actor),
            "owner" => Ok(RateSource::Owner),
            other => Err(format!("unknown rate source '{other}', expected 'actor' or 'owner'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualPolicy {
    pub rate_source: RateSource,
    pub allow_concurrent_open_entries: bool,
    pub enforce_project_crew: bool,
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self {
            rate_source: RateSource::Actor,
            allow_concurrent_open_entries: true,
            enforce_project_crew: false,
        }
    }
}
