use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::modules::time_entries::core::policy::{AccrualPolicy, RateSource};
use crate::modules::time_entries::use_cases::resolve_actor::credentials::DEFAULT_SESSION_COOKIE;

pub const ADDR_VAR: &str = "CREW_CLOCK_ADDR";
pub const SESSION_COOKIE_VAR: &str = "CREW_CLOCK_SESSION_COOKIE";
pub const RATE_SOURCE_VAR: &str = "CREW_CLOCK_RATE_SOURCE";
pub const ALLOW_CONCURRENT_OPEN_ENTRIES_VAR: &str = "CREW_CLOCK_ALLOW_CONCURRENT_OPEN_ENTRIES";
pub const ENFORCE_PROJECT_CREW_VAR: &str = "CREW_CLOCK_ENFORCE_PROJECT_CREW";
pub const DIRECTORY_FILE_VAR: &str = "CREW_CLOCK_DIRECTORY_FILE";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {reason}")]
    InvalidRateSource { var: &'static str, reason: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub session_cookie: String,
    pub policy: AccrualPolicy,
    pub directory_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).map(|v| v.trim().to_string());

        let addr_raw = read(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = SocketAddr::from_str(&addr_raw).map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: addr_raw.clone(),
        })?;

        let session_cookie = match read(SESSION_COOKIE_VAR) {
            Some(name) if name.is_empty() => {
                return Err(ConfigError::Empty {
                    var: SESSION_COOKIE_VAR,
                });
            }
            Some(name) => name,
            None => DEFAULT_SESSION_COOKIE.to_string(),
        };

        let defaults = AccrualPolicy::default();
        let rate_source = match read(RATE_SOURCE_VAR) {
            Some(raw) => RateSource::from_str(&raw).map_err(|reason| {
                ConfigError::InvalidRateSource {
                    var: RATE_SOURCE_VAR,
                    reason,
                }
            })?,
            None => defaults.rate_source,
        };
        let policy = AccrualPolicy {
            rate_source,
            allow_concurrent_open_entries: read_bool(
                ALLOW_CONCURRENT_OPEN_ENTRIES_VAR,
                read(ALLOW_CONCURRENT_OPEN_ENTRIES_VAR),
                defaults.allow_concurrent_open_entries,
            )?,
            enforce_project_crew: read_bool(
                ENFORCE_PROJECT_CREW_VAR,
                read(ENFORCE_PROJECT_CREW_VAR),
                defaults.enforce_project_crew,
            )?,
        };

        let directory_file = read(DIRECTORY_FILE_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr,
            session_cookie,
            policy,
            directory_file,
        })
    }
}

fn read_bool(var: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value: raw }),
    }
}
