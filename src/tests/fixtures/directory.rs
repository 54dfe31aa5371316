// Shared directory fixture: users, projects, budget buckets and sessions from json/directory.json.

use crate::modules::time_entries::core::actor::{Role, User};
use crate::shared::infrastructure::directory::DirectorySnapshot;
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::shared::infrastructure::sessions::in_memory::InMemorySessionStore;

pub const DIRECTORY_FIXTURE_PATH: &str = "./src/tests/fixtures/json/directory.json";

/// hourly 20, burden 5, crew of project-0001.
pub const EMPLOYEE_ID: &str = "user-employee-0001";
/// hourly 25, burden 6, not on any crew.
pub const SECOND_EMPLOYEE_ID: &str = "user-employee-0002";
/// hourly 50, burden 12.
pub const MANAGER_ID: &str = "user-manager-0001";
/// hourly 60, burden 15.
pub const ADMIN_ID: &str = "user-admin-0001";

pub const PROJECT_ID: &str = "project-0001";
/// No crew.
pub const OTHER_PROJECT_ID: &str = "project-0002";
pub const BUCKET_ID: &str = "bucket-0001";
/// Belongs to project-0002.
pub const OTHER_BUCKET_ID: &str = "bucket-0002";

pub const EMPLOYEE_SESSION: &str = "session-ana";
pub const NEWCOMER_SESSION: &str = "session-newcomer";
pub const NEWCOMER_EMAIL: &str = "newcomer@crew.test";

pub fn fixture_snapshot() -> DirectorySnapshot {
    DirectorySnapshot::from_file(DIRECTORY_FIXTURE_PATH).unwrap()
}

pub fn fixture_directory() -> InMemoryDirectory {
    InMemoryDirectory::from_snapshot(&fixture_snapshot())
}

pub fn fixture_sessions() -> InMemorySessionStore {
    InMemorySessionStore::from_records(&fixture_snapshot().sessions)
}

pub fn fixture_user(user_id: &str) -> User {
    fixture_snapshot()
        .users
        .into_iter()
        .find(|u| u.id == user_id)
        .unwrap_or_else(|| panic!("no fixture user {user_id}"))
}

pub struct UserBuilder {
    inner: User,
}

#[allow(dead_code)]
impl UserBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            inner: User {
                email: format!("{id}@crew.test"),
                id,
                name: None,
                role: Role::Employee,
                hourly_rate: None,
                burden_rate: None,
            },
        }
    }

    pub fn role(mut self, v: Role) -> Self {
        self.inner.role = v;
        self
    }

    pub fn rates(mut self, hourly: f64, burden: f64) -> Self {
        self.inner.hourly_rate = Some(hourly);
        self.inner.burden_rate = Some(burden);
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}
