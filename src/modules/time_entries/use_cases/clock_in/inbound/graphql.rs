use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql_types::{
    GqlTimeEntry, gql_error, parse_timestamp,
};
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::modules::time_entries::use_cases::resolve_actor::inbound::graphql::actor_from_context;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ClockInMutation;

#[Object]
impl ClockInMutation {
    async fn clock_in(
        &self,
        context: &Context<'_>,
        project_id: Option<String>,
        budget_bucket_id: Option<String>,
        start_time: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> GqlResult<GqlTimeEntry> {
        let actor = actor_from_context(context).await?;
        let state = context.data_unchecked::<AppState>();

        let command = ClockIn {
            project_id,
            budget_bucket_id,
            start_time: parse_timestamp("startTime", start_time).map_err(gql_error)?,
            latitude,
            longitude,
        };

        let entry = state
            .clock_in_handler
            .handle(&actor, command)
            .await
            .map_err(gql_error)?;
        Ok(entry.into())
    }
}
