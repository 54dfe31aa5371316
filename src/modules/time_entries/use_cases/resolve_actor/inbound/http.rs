use axum::{extract::FromRequestParts, http::request::Parts};

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::use_cases::resolve_actor::credentials::Credentials;
use crate::shell::state::AppState;

/// The resolved caller. Extracting it rejects with 401 before any body is read.
#[derive(Debug, Clone)]
pub struct AuthenticatedActor(pub User);

impl FromRequestParts<AppState> for AuthenticatedActor {
    type Rejection = ServiceError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = Credentials::from_headers(&parts.headers, &state.session_cookie);
        let actor = state.actors.resolve(&credentials).await.inspect_err(|error| {
            if matches!(error, ServiceError::Unauthorized) {
                tracing::debug!(path = %parts.uri.path(), "rejected unauthenticated request");
            }
        })?;
        Ok(AuthenticatedActor(actor))
    }
}
