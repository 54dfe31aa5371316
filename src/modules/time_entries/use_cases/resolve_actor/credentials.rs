use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;

pub const DEFAULT_SESSION_COOKIE: &str = "session_token";

/// Raw credentials presented by a caller, before any lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// `Authorization: Bearer <userId>`, used by the mobile app.
    pub bearer: Option<String>,
    /// Session cookie value, used by the web app.
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn from_headers(headers: &HeaderMap, session_cookie: &str) -> Self {
        Self {
            bearer: extract_bearer(headers),
            session_token: extract_cookie(headers, session_cookie),
        }
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(name)
        .map(|cookie| cookie.value_trimmed().to_string())
        .filter(|value| !value.is_empty())
}
