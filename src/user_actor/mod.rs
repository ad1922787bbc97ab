//! # User Actor
//!
//! Manages user accounts for the auth collaborator: signup with unique
//! usernames, and credential checks for login. No dependencies, no custom
//! actions.

pub mod entity;
pub mod error;

pub use error::UserError;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates the user actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, UserClient::new(generic_client))
}
