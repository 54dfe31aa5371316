use crate::shared::infrastructure::sessions::{SessionIdentity, SessionRecord, SessionStore};
use crate::shared::infrastructure::store_error::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionIdentity>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[SessionRecord]) -> Self {
        Self {
            sessions: RwLock::new(
                records
                    .iter()
                    .map(|r| {
                        (
                            r.token.clone(),
                            SessionIdentity {
                                email: r.email.clone(),
                                name: r.name.clone(),
                            },
                        )
                    })
                    .collect(),
            ),
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn identity(&self, token: &str) -> Result<Option<SessionIdentity>, StoreError> {
        Ok(self.sessions.read().await.get(token).cloned())
    }
}
