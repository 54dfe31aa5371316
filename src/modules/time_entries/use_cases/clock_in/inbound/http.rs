use axum::{
    Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse,
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::error_response::invalid_body;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::modules::time_entries::use_cases::resolve_actor::inbound::http::AuthenticatedActor;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInBody {
    pub project_id: Option<String>,
    pub budget_bucket_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<ClockInBody> for ClockIn {
    fn from(body: ClockInBody) -> Self {
        Self {
            project_id: body.project_id,
            budget_bucket_id: body.budget_bucket_id,
            start_time: body.start_time,
            latitude: body.latitude,
            longitude: body.longitude,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    body: Bytes,
) -> Response {
    let body: ClockInBody = match serde_json::from_slice(&body) {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    match state.clock_in_handler.handle(&actor, body.into()).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error.into_response(),
    }
}
