use async_trait::async_trait;
use serde::Deserialize;

use crate::shared::infrastructure::store_error::StoreError;

pub mod in_memory;

/// Identity claims carried by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub token: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Authentication provider lookup: session token to identity.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn identity(&self, token: &str) -> Result<Option<SessionIdentity>, StoreError>;
}
