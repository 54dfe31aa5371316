use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql_types::{
    GqlTimeEntry, gql_error, parse_timestamp,
};
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::resolve_actor::inbound::graphql::actor_from_context;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ClockOutMutation;

#[Object]
impl ClockOutMutation {
    /// Closes an entry, or corrects an already closed one.
    async fn clock_out(
        &self,
        context: &Context<'_>,
        id: ID,
        end_time: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        budget_bucket_id: Option<String>,
    ) -> GqlResult<GqlTimeEntry> {
        let actor = actor_from_context(context).await?;
        let state = context.data_unchecked::<AppState>();

        let command = ClockOut {
            entry_id: Some(id.0),
            end_time: parse_timestamp("endTime", end_time).map_err(gql_error)?,
            latitude,
            longitude,
            budget_bucket_id,
        };

        let entry = state
            .clock_out_handler
            .handle(&actor, command)
            .await
            .map_err(gql_error)?;
        Ok(entry.into())
    }
}
