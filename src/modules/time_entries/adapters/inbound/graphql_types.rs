use async_graphql::{ErrorExtensions, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::time_entries::core::actor::{Role, User};
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::core::project::{BudgetBucket, Project};
use crate::modules::time_entries::core::time_entry::{EntryStatus, TimeEntry};
use crate::modules::time_entries::use_cases::list_time_entries::view::TimeEntryView;
use crate::shared::core::primitives::format_millis;

#[derive(SimpleObject, Clone)]
pub struct GqlUser {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub role: String,
    pub hourly_rate: Option<f64>,
    pub burden_rate: Option<f64>,
}

impl From<User> for GqlUser {
    fn from(u: User) -> Self {
        let role = match u.role {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        };
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: role.to_string(),
            hourly_rate: u.hourly_rate,
            burden_rate: u.burden_rate,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProject {
    pub id: String,
    pub name: String,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlBudgetBucket {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub code: Option<String>,
}

impl From<BudgetBucket> for GqlBudgetBucket {
    fn from(b: BudgetBucket) -> Self {
        Self {
            id: b.id,
            project_id: b.project_id,
            name: b.name,
            code: b.code,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: String,
    pub status: String,
    pub user_id: String,
    pub project_id: String,
    pub budget_bucket_id: Option<String>,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_hours: Option<f64>,
    pub labor_cost: Option<f64>,
    pub burden_cost: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub edited_by_manager_id: Option<String>,
    pub edited_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub user: Option<GqlUser>,
    pub project: Option<GqlProject>,
    pub budget_bucket: Option<GqlBudgetBucket>,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(e: TimeEntry) -> Self {
        let status = match e.status() {
            EntryStatus::Open => "OPEN",
            EntryStatus::Closed => "CLOSED",
        };
        Self {
            id: e.id,
            status: status.to_string(),
            user_id: e.user_id,
            project_id: e.project_id,
            budget_bucket_id: e.budget_bucket_id,
            start_time: format_millis(e.start_time),
            end_time: e.end_time.map(format_millis),
            duration_hours: e.duration_hours,
            labor_cost: e.labor_cost,
            burden_cost: e.burden_cost,
            latitude: e.latitude,
            longitude: e.longitude,
            edited_by_manager_id: e.edited_by_manager_id,
            edited_at: e.edited_at.map(format_millis),
            created_at: format_millis(e.created_at),
            updated_at: format_millis(e.updated_at),
            user: None,
            project: None,
            budget_bucket: None,
        }
    }
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            user: v.user.map(Into::into),
            project: v.project.map(Into::into),
            budget_bucket: v.budget_bucket.map(Into::into),
            ..GqlTimeEntry::from(v.entry)
        }
    }
}

pub fn parse_timestamp(
    field: &str,
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>, ServiceError> {
    value
        .map(|raw| {
            DateTime::parse_from_rfc3339(&raw)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|_| ServiceError::validation(format!("Invalid {field}")))
        })
        .transpose()
}

pub fn gql_error(error: ServiceError) -> async_graphql::Error {
    if let ServiceError::Internal(cause) = &error {
        tracing::error!(%cause, "graphql request failed");
    }
    let code = error.code();
    async_graphql::Error::new(error.public_message())
        .extend_with(|_, extensions| extensions.set("code", code))
}
