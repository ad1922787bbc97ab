//! # Menu Actor
//!
//! Owns the menu catalog and its stock counters. Because the actor handles
//! one message at a time, the `Reserve` action's check-and-decrement is a
//! single atomic step: two concurrent reservations against the last unit of
//! an item can never both succeed.
//!
//! - [`entity`]: `ActorEntity` implementation for [`MenuItem`]
//! - [`actions`]: the `Reserve`/`Release` stock operations
//! - [`error`]: [`MenuError`]
//! - [`new()`]: factory producing the actor and its [`MenuClient`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::{MenuAction, MenuActionResult};
pub use error::MenuError;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates the menu actor and its client. The actor has no dependencies, so
/// it runs with an empty context.
pub fn new() -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, MenuClient::new(generic_client))
}
