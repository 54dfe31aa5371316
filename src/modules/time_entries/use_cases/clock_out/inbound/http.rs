use axum::{Json, body::Bytes, extract::State, response::IntoResponse, response::Response};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::error_response::invalid_body;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::resolve_actor::inbound::http::AuthenticatedActor;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockOutBody {
    pub id: Option<String>,
    pub end_time: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub budget_bucket_id: Option<String>,
}

impl From<ClockOutBody> for ClockOut {
    fn from(body: ClockOutBody) -> Self {
        Self {
            entry_id: body.id,
            end_time: body.end_time,
            latitude: body.latitude,
            longitude: body.longitude,
            budget_bucket_id: body.budget_bucket_id,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    body: Bytes,
) -> Response {
    let body: ClockOutBody = match serde_json::from_slice(&body) {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    match state.clock_out_handler.handle(&actor, body.into()).await {
        Ok(entry) => Json(entry).into_response(),
        Err(error) => error.into_response(),
    }
}
