//! # User Client
//!
//! Signup and login for the auth collaborator. Login produces a
//! [`Principal`], the authenticated identity the rest of the system
//! consumes, never the stored password.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Credentials, Principal, User, UserCreate, UserFilter, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for the user actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    fn map_err(e: FrameworkError) -> UserError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(user_err) => *user_err,
                Err(other) => UserError::ActorCommunication(other.to_string()),
            },
            other => UserError::ActorCommunication(other.to_string()),
        }
    }

    /// Registers a new account. Usernames are unique.
    #[instrument(skip(self, params), fields(username = %params.username))]
    pub async fn signup(&self, params: UserCreate) -> Result<UserId, UserError> {
        let username = params.username.trim().to_string();
        if username.is_empty() || params.password.is_empty() {
            return Err(UserError::Validation(
                "username and password must not be empty".to_string(),
            ));
        }

        let existing = self.find(UserFilter::ByUsername(username.clone())).await?;
        if !existing.is_empty() {
            return Err(UserError::UsernameTaken);
        }

        let id = self
            .inner
            .create(UserCreate {
                username,
                password: params.password,
                role: params.role,
            })
            .await
            .map_err(Self::map_err)?;
        info!(user_id = %id, "User registered");
        Ok(id)
    }

    /// Checks the credentials, including the requested role, and returns the
    /// authenticated principal.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: Credentials) -> Result<Principal, UserError> {
        let users = self
            .find(UserFilter::ByUsername(credentials.username.clone()))
            .await?;
        let user = users
            .into_iter()
            .next()
            .ok_or(UserError::InvalidCredentials)?;

        if user.password != credentials.password || user.role != credentials.role {
            return Err(UserError::InvalidCredentials);
        }

        Ok(Principal {
            user_id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> UserError {
        Self::map_err(e)
    }
}
