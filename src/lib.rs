//! # quickserve
//!
//! A restaurant order-management backend: customers place orders against a
//! finite-stock menu, staff advance them through a fulfillment pipeline, and
//! a background sweeper abandons Ready orders nobody picks up, returning
//! their stock.
//!
//! Every resource (menu item, order, user) is owned by an actor built on the
//! generic [`framework`]; sequential message processing inside each actor is
//! what makes stock reservation and status transitions atomic without locks.
//!
//! - [`framework`]: generic resource actor, client, mock
//! - [`model`]: domain types and DTOs
//! - [`menu_actor`] / [`order_actor`] / [`user_actor`]: the resources
//! - [`clients`]: domain clients, including the order lifecycle engine
//! - [`runtime`]: system wiring, the abandonment sweeper, tracing setup

pub mod clients;
pub mod framework;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod runtime;
pub mod user_actor;
