use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::time_entries::use_cases::clock_in::inbound::graphql::ClockInMutation;
use crate::modules::time_entries::use_cases::clock_out::inbound::graphql::ClockOutMutation;
pub use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::QueryRoot;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(ClockInMutation, ClockOutMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
