// Composition root for the time_entries bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the REST routes and the GraphQL schema on one router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
