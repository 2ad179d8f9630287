use tracing::{debug, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserPatch, UserRole};
use crate::error::{AuthError, UserError};
use crate::user_actor::UserQuery;

/// Client for the user directory actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Looks up the single account matching both email (case-insensitive)
    /// and role. There is no password check; this is the mock's entire
    /// authentication story.
    #[instrument(skip(self))]
    pub async fn login(&self, email: &str, role: UserRole) -> Result<User, AuthError> {
        debug!("Sending request");
        let matches = self
            .inner
            .list(Some(UserQuery::Credentials {
                email: email.to_owned(),
                role,
            }))
            .await
            .map_err(|_| AuthError::ActorClosed)?;

        matches.into_iter().next().ok_or_else(|| {
            warn!("Login failed: no matching account");
            AuthError::NotFound {
                email: email.to_owned(),
                role,
            }
        })
    }

    /// Everyone in the directory holding one role.
    #[instrument(skip(self))]
    pub async fn users_in_role(&self, role: UserRole) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner.list(Some(UserQuery::Role(role))).await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: String) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await
    }
}
