use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql_types::{GqlTimeEntry, gql_error};
use crate::modules::time_entries::use_cases::list_time_entries::query::ListTimeEntries;
use crate::modules::time_entries::use_cases::resolve_actor::inbound::graphql::actor_from_context;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn time_entries(
        &self,
        context: &Context<'_>,
        project_id: Option<String>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let actor = actor_from_context(context).await?;
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_handler
            .handle(&actor, ListTimeEntries { project_id })
            .await
            .map_err(gql_error)?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
