//! # Order Actor
//!
//! Owns every order record and is the only writer of `Order.status`. Status
//! transitions are handled as actions, so the transition-table check, the
//! timestamp stamp and the status write happen in one actor turn: when two
//! staff requests race on the same order, one wins and the other is
//! re-evaluated against the new status.
//!
//! The actor runs with a [`MenuClient`] as context so that compensating
//! stock releases (cancellation, abandonment) are driven from inside the
//! same turn that commits the transition.
//!
//! - [`entity`]: `ActorEntity` implementation for [`Order`]
//! - [`actions`]: [`OrderAction::Transition`] and [`OrderAction::Abandon`]
//! - [`error`]: [`OrderError`]
//! - [`new()`]: factory producing the actor and its raw resource client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::{OrderAction, OrderActionResult};
pub use error::OrderError;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates the order actor and the generic client the [`OrderClient`]
/// wrapper is built from. Run it with `actor.run(menu_client)`.
///
/// [`OrderClient`]: crate::clients::OrderClient
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
