use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use crew_clock::shared::core::primitives::SystemClock;
use crew_clock::shared::infrastructure::directory::DirectorySnapshot;
use crew_clock::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crew_clock::shared::infrastructure::sessions::in_memory::InMemorySessionStore;
use crew_clock::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;
use crew_clock::shell::config::AppConfig;
use crew_clock::shell::http::{GRAPHQL_PATH, router};
use crew_clock::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let snapshot = match &config.directory_file {
        Some(path) => DirectorySnapshot::from_file(path)?,
        None => {
            tracing::warn!("no directory file configured, starting with an empty directory");
            DirectorySnapshot::default()
        }
    };
    tracing::info!(
        users = snapshot.users.len(),
        projects = snapshot.projects.len(),
        budget_buckets = snapshot.budget_buckets.len(),
        sessions = snapshot.sessions.len(),
        "directory loaded"
    );

    let state = AppState::new(
        &config.session_cookie,
        Arc::new(InMemoryTimeEntryStore::new()),
        Arc::new(InMemoryDirectory::from_snapshot(&snapshot)),
        Arc::new(InMemorySessionStore::from_records(&snapshot.sessions)),
        Arc::new(SystemClock),
        config.policy,
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(policy = ?config.policy, "REST endpoint: http://{}/time-entries", config.addr);
    tracing::info!("GraphQL endpoint: http://{}{}", config.addr, GRAPHQL_PATH);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
