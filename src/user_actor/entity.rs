//! `ActorEntity` implementation for [`User`].

use super::error::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserFilter, UserId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Filter = UserFilter;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            username: params.username,
            password: params.password,
            role: params.role,
        })
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::ByUsername(username) => self.username == *username,
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
