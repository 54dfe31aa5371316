// Port for the records a time entry refers to: users, projects, and budget buckets.
//
// Boundaries
// - Owned by the persistence layer. The time entry core only reads them, except for the
//   get-or-create step used when a session identity has no user yet.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::project::{BudgetBucket, Project};
use crate::shared::infrastructure::sessions::SessionRecord;
use crate::shared::infrastructure::store_error::StoreError;

pub mod in_memory;

#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionedUser {
    pub user: User,
    pub created: bool,
}

#[async_trait]
pub trait Directory: Send + Sync {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError>;

    /// Idempotent: concurrent calls for the same email yield one user.
    async fn get_or_create_user_by_email(
        &self,
        email: &str,
        name: Option<&str>,
    ) -> Result<ProvisionedUser, StoreError>;

    async fn project_by_id(&self, project_id: &str) -> Result<Option<Project>, StoreError>;

    async fn budget_bucket_by_id(
        &self,
        budget_bucket_id: &str,
    ) -> Result<Option<BudgetBucket>, StoreError>;
}

/// JSON document used to bootstrap the in-memory adapters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub budget_buckets: Vec<BudgetBucket>,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}

impl DirectorySnapshot {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading directory snapshot {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing directory snapshot {}", path.display()))
    }
}
