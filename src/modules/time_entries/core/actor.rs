use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Employee,
    Manager,
    Admin,
}

impl Role {
    /// Managers and admins may see and correct everyone's entries.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Manager | Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub burden_rate: Option<f64>,
}

impl User {
    /// A user created on first session access: employee, no rates.
    pub fn provisioned(id: String, email: String, name: Option<String>) -> Self {
        Self {
            id,
            name,
            email,
            role: Role::Employee,
            hourly_rate: None,
            burden_rate: None,
        }
    }
}
