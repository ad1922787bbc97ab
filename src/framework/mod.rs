//! # Resource-Actor Framework
//!
//! Generic building blocks for the actor-based resources in this crate. Each
//! resource type (menu item, order, user) implements [`ActorEntity`] and is
//! owned by a [`ResourceActor`] running in its own tokio task. All requests
//! for one resource type flow through a single mpsc channel and are processed
//! sequentially, which is what makes stock reservation and status transitions
//! atomic without any locking.
//!
//! The pieces:
//!
//! - [`ActorEntity`]: the contract a domain type implements: associated
//!   types for ids, DTOs, actions, filters, context and errors, plus
//!   lifecycle hooks.
//! - [`ResourceActor`]: the event loop owning the entity store.
//! - [`ResourceClient`]: cloneable, type-safe handle for talking to an
//!   actor over the channel.
//! - [`ActorClient`]: trait that gives resource-specific client wrappers a
//!   shared `get`/`find` surface.
//! - [`FrameworkError`]: the transport-level error envelope; domain errors
//!   travel inside it as boxed `std::error::Error` values and are recovered
//!   by downcasting on the client side.
//! - [`mock`]: in-memory mock client with an expectation API for testing
//!   client logic without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
