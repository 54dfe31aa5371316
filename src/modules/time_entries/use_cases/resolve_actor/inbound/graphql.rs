use async_graphql::Context;

use crate::modules::time_entries::adapters::inbound::graphql_types::gql_error;
use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::use_cases::resolve_actor::credentials::Credentials;
use crate::shell::state::AppState;

/// Resolves the caller from the credentials the HTTP layer attached to the request.
pub async fn actor_from_context(context: &Context<'_>) -> async_graphql::Result<User> {
    let state = context.data_unchecked::<AppState>();
    let anonymous = Credentials::default();
    let credentials = context.data_opt::<Credentials>().unwrap_or(&anonymous);
    state.actors.resolve(credentials).await.map_err(gql_error)
}
