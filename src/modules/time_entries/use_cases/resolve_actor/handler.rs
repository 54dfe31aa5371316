// Actor resolution shared by every inbound adapter.
//
// Order
// - A bearer user id that names an existing user wins.
// - Otherwise a known session token resolves by email, creating an EMPLOYEE on first access.
// - Otherwise the caller is unauthorized.

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::errors::ServiceError;
use crate::modules::time_entries::use_cases::resolve_actor::credentials::Credentials;
use crate::shared::infrastructure::directory::Directory;
use crate::shared::infrastructure::sessions::SessionStore;

#[async_trait]
pub trait ActorResolver: Send + Sync {
    async fn resolve(&self, credentials: &Credentials) -> Result<User, ServiceError>;
}

pub struct DirectoryActorResolver<TDirectory, TSessions>
where
    TDirectory: Directory + 'static,
    TSessions: SessionStore + 'static,
{
    directory: Arc<TDirectory>,
    sessions: Arc<TSessions>,
}

impl<TDirectory, TSessions> DirectoryActorResolver<TDirectory, TSessions>
where
    TDirectory: Directory + 'static,
    TSessions: SessionStore + 'static,
{
    pub fn new(directory: Arc<TDirectory>, sessions: Arc<TSessions>) -> Self {
        Self {
            directory,
            sessions,
        }
    }
}

#[async_trait]
impl<TDirectory, TSessions> ActorResolver for DirectoryActorResolver<TDirectory, TSessions>
where
    TDirectory: Directory + 'static,
    TSessions: SessionStore + 'static,
{
    async fn resolve(&self, credentials: &Credentials) -> Result<User, ServiceError> {
        if let Some(user_id) = credentials.bearer.as_deref() {
            if let Some(user) = self.directory.user_by_id(user_id).await? {
                return Ok(user);
            }
            tracing::debug!(user_id, "bearer user id did not resolve");
        }

        let Some(token) = credentials.session_token.as_deref() else {
            return Err(ServiceError::Unauthorized);
        };
        let Some(identity) = self.sessions.identity(token).await? else {
            return Err(ServiceError::Unauthorized);
        };

        let provisioned = self
            .directory
            .get_or_create_user_by_email(&identity.email, identity.name.as_deref())
            .await?;
        if provisioned.created {
            tracing::info!(
                user_id = %provisioned.user.id,
                email = %identity.email,
                "provisioned employee on first session access"
            );
        }
        Ok(provisioned.user)
    }
}
