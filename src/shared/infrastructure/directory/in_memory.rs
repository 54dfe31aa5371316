use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::project::{BudgetBucket, Project};
use crate::shared::core::primitives::new_id;
use crate::shared::infrastructure::directory::{Directory, DirectorySnapshot, ProvisionedUser};
use crate::shared::infrastructure::store_error::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<String, User>>,
    projects: RwLock<HashMap<String, Project>>,
    budget_buckets: RwLock<HashMap<String, BudgetBucket>>,
    is_offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: &DirectorySnapshot) -> Self {
        Self {
            users: RwLock::new(
                snapshot
                    .users
                    .iter()
                    .map(|u| (u.id.clone(), u.clone()))
                    .collect(),
            ),
            projects: RwLock::new(
                snapshot
                    .projects
                    .iter()
                    .map(|p| (p.id.clone(), p.clone()))
                    .collect(),
            ),
            budget_buckets: RwLock::new(
                snapshot
                    .budget_buckets
                    .iter()
                    .map(|b| (b.id.clone(), b.clone()))
                    .collect(),
            ),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Directory for InMemoryDirectory {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn get_or_create_user_by_email(
        &self,
        email: &str,
        name: Option<&str>,
    ) -> Result<ProvisionedUser, StoreError> {
        self.ensure_online()?;
        let mut guard = self.users.write().await;
        if let Some(existing) = guard.values().find(|u| u.email == email) {
            return Ok(ProvisionedUser {
                user: existing.clone(),
                created: false,
            });
        }
        let user = User::provisioned(new_id(), email.to_string(), name.map(str::to_string));
        guard.insert(user.id.clone(), user.clone());
        Ok(ProvisionedUser {
            user,
            created: true,
        })
    }

    async fn project_by_id(&self, project_id: &str) -> Result<Option<Project>, StoreError> {
        self.ensure_online()?;
        Ok(self.projects.read().await.get(project_id).cloned())
    }

    async fn budget_bucket_by_id(
        &self,
        budget_bucket_id: &str,
    ) -> Result<Option<BudgetBucket>, StoreError> {
        self.ensure_online()?;
        Ok(self.budget_buckets.read().await.get(budget_bucket_id).cloned())
    }
}
