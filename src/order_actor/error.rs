//! Error type for order operations.

use crate::menu_actor::MenuError;
use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur while placing or advancing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Malformed placement input (no lines, a zero quantity, blank
    /// customer id).
    #[error("Invalid order: {0}")]
    Validation(String),

    /// The order id is unknown.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A requested line references a menu item that does not exist.
    #[error("One or more menu items not found: {0}")]
    MenuItemNotFound(String),

    /// The pre-check found less stock than the merged request needs.
    #[error("Not enough stock for {name}. Available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// The customer already holds the maximum number of active orders.
    #[error("Customer {customer_id} already has 2 active orders")]
    TooManyActiveOrders { customer_id: String },

    /// The requested status change is not in the transition table for the
    /// order's current status.
    #[error("Invalid status change: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// A per-line reservation failed after the pre-check had passed,
    /// meaning stock changed underneath the placement.
    #[error("Stock update failed, try again")]
    StockConflict,

    /// The actor or its channel went away.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<MenuError> for OrderError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::Validation(msg) => OrderError::Validation(msg),
            MenuError::NotFound(id) => OrderError::MenuItemNotFound(id),
            MenuError::InsufficientStock {
                name,
                requested,
                available,
            } => OrderError::InsufficientStock {
                name,
                requested,
                available,
            },
            MenuError::ActorCommunication(msg) => OrderError::ActorCommunication(msg),
        }
    }
}
