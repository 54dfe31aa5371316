// List query.
//
// - MANAGER and ADMIN see every user's entries; everyone else sees only their own.
// - Optional project filter; newest start_time first; no pagination.
// - Each row is joined with its owner, project and budget bucket, looked up once per id.

use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::authorization::can_view_all_entries;
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::core::project::{BudgetBucket, Project};
use crate::modules::time_entries::use_cases::list_time_entries::query::ListTimeEntries;
use crate::modules::time_entries::use_cases::list_time_entries::view::TimeEntryView;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::time_entry_store::{TimeEntryFilter, TimeEntryStore};

pub struct ListTimeEntriesHandler<TStore, TDirectory>
where
    TStore: TimeEntryStore + 'static,
    TDirectory: Directory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
}

impl<TStore, TDirectory> ListTimeEntriesHandler<TStore, TDirectory>
where
    TStore: TimeEntryStore + 'static,
    TDirectory: Directory + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn handle(
        &self,
        actor: &User,
        query: ListTimeEntries,
    ) -> Result<Vec<TimeEntryView>, ServiceError> {
        let filter = TimeEntryFilter {
            user_id: (!can_view_all_entries(actor)).then(|| actor.id.clone()),
            project_id: query.project_id().map(str::to_string),
        };
        let entries = self.store.list(&filter).await?;

        let mut users: HashMap<String, Option<User>> = HashMap::new();
        let mut projects: HashMap<String, Option<Project>> = HashMap::new();
        let mut buckets: HashMap<String, Option<BudgetBucket>> = HashMap::new();
        let mut views = Vec::with_capacity(entries.len());

        for entry in entries {
            if !users.contains_key(&entry.user_id) {
                let user = self.directory.user_by_id(&entry.user_id).await?;
                users.insert(entry.user_id.clone(), user);
            }
            if !projects.contains_key(&entry.project_id) {
                let project = self.directory.project_by_id(&entry.project_id).await?;
                projects.insert(entry.project_id.clone(), project);
            }
            let budget_bucket = match entry.budget_bucket_id.as_deref() {
                Some(bucket_id) => {
                    if !buckets.contains_key(bucket_id) {
                        let bucket = self.directory.budget_bucket_by_id(bucket_id).await?;
                        buckets.insert(bucket_id.to_string(), bucket);
                    }
                    buckets.get(bucket_id).cloned().flatten()
                }
                None => None,
            };

            views.push(TimeEntryView {
                user: users.get(&entry.user_id).cloned().flatten(),
                project: projects.get(&entry.project_id).cloned().flatten(),
                budget_bucket,
                entry,
            });
        }

        tracing::debug!(user_id = %actor.id, count = views.len(), "listed time entries");
        Ok(views)
    }
}
