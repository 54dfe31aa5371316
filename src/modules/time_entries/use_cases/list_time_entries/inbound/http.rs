use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries::query::ListTimeEntries;
use crate::modules::time_entries::use_cases::resolve_actor::inbound::http::AuthenticatedActor;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTimeEntriesParams {
    pub project_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Query(params): Query<ListTimeEntriesParams>,
) -> Response {
    let query = ListTimeEntries {
        project_id: params.project_id,
    };
    match state.list_handler.handle(&actor, query).await {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error.into_response(),
    }
}
