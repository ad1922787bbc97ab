//! The [`ActorEntity`] trait: the contract between a domain type and the
//! generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! A resource type defines its id, its create/update DTOs, its custom
//! actions, a filter for queries, the context its hooks need, and its error
//! type. The actor then provides a uniform CRUD + Find + Action API for it.
//! Associated types keep everything compile-time checked: an order actor can
//! never be handed a menu-item payload.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait implemented by every resource managed by a `ResourceActor`.
///
/// Hooks are async so an entity can call other actors through its `Context`.
/// The context is injected when the actor's `run()` loop starts ("late
/// binding"), which keeps actor construction free of dependency cycles: the
/// order actor is created before the menu client it will eventually hold.
///
/// Each entity carries a single error enum covering all of its operations.
/// Per-action error types would be more precise but cost far more
/// boilerplate; one enum per resource keeps client-side matching simple.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. `From<u32>` lets the actor generate ids from its
    /// internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. reserving stock,
    /// applying a status transition).
    type Action: Send + Sync + Debug;

    /// Result type returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Predicate payload for `Find` requests. The actor returns every stored
    /// entity for which [`ActorEntity::matches`] holds.
    type Filter: Send + Sync + Debug;

    /// Dependencies injected into every hook. `()` when the entity needs
    /// none.
    type Context: Send + Sync;

    /// The error enum for this resource.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from a freshly generated id and the create payload.
    /// Runs synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity is selected by the given filter.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Called after construction, before the entity is inserted into the
    /// store. A failure here means the entity is never stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload to the entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
