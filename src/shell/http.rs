use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    extract::State,
    http::HeaderMap,
    response::Html,
    routing::get,
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::time_entries::use_cases::clock_in::inbound::http as clock_in_http;
use crate::modules::time_entries::use_cases::clock_out::inbound::http as clock_out_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::resolve_actor::credentials::Credentials;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route(
            "/time-entries",
            get(list_http::handle)
                .post(clock_in_http::handle)
                .put(clock_out_http::handle),
        )
        .route("/health", get(health))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let credentials = Credentials::from_headers(&headers, &state.session_cookie);
    schema
        .execute(request.into_inner().data(credentials))
        .await
        .into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
