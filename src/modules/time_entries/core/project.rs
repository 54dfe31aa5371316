use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// User ids allowed to log time here. Empty means anyone.
    #[serde(default, skip_serializing)]
    pub crew: Vec<String>,
}

impl Project {
    pub fn has_crew_member(&self, user_id: &str) -> bool {
        self.crew.iter().any(|member| member == user_id)
    }
}

/// Cost-code classification within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBucket {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}
