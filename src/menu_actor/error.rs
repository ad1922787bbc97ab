//! Error type for menu operations.

use thiserror::Error;

/// Errors that can occur during menu catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// Malformed upsert input (empty name, negative or non-finite price).
    #[error("Invalid menu item: {0}")]
    Validation(String),

    /// The referenced menu item does not exist.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A reservation asked for more than is available.
    #[error("Not enough stock for {name}. Available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// The actor or its channel went away.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
