//! Order types and the status state machine.

use crate::model::MenuItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// The order lifecycle.
///
/// ```text
/// Placed ──► Preparing ──► Ready ──► PickedUp
///    │            │          │
///    ▼            ▼          ▼ (sweeper only)
/// Cancelled   Cancelled   Abandoned
/// ```
///
/// `PickedUp`, `Cancelled` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    PickedUp,
    Cancelled,
    Abandoned,
}

impl OrderStatus {
    /// Targets a staff status-change request may move this status to.
    /// `Ready -> Abandoned` is deliberately absent: only the sweeper takes
    /// that edge, through its own action.
    pub fn allowed_targets(self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Placed => &[OrderStatus::Preparing, OrderStatus::Cancelled],
            OrderStatus::Preparing => &[OrderStatus::Ready, OrderStatus::Cancelled],
            OrderStatus::Ready => &[OrderStatus::PickedUp],
            OrderStatus::PickedUp | OrderStatus::Cancelled | OrderStatus::Abandoned => &[],
        }
    }

    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        self.allowed_targets().contains(&target)
    }

    /// Active means the order still occupies the customer's order cap:
    /// Placed, Preparing or Ready.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Preparing | OrderStatus::Ready
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::PickedUp => "PickedUp",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Abandoned => "Abandoned",
        };
        f.write_str(s)
    }
}

/// A requested line as it arrives from the customer: item reference and
/// quantity only. Duplicated item ids are merged during placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestedLine {
    pub menu_item_id: MenuItemId,
    pub qty: u32,
}

/// A stored line with the name and unit price captured at placement time.
/// Later menu edits never touch these snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub unit_price: f64,
    pub qty: u32,
}

/// Public placement payload (`POST /orders` in the external surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub customer_id: String,
    pub is_priority: bool,
    pub items: Vec<RequestedLine>,
}

/// Create params handed to the order actor after the engine has merged
/// lines, reserved stock and computed the price snapshots.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: String,
    pub is_priority: bool,
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
}

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: String,
    pub is_priority: bool,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    /// Sum of `unit_price * qty` over the lines, computed once at placement.
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub ready_at: Option<DateTime<Utc>>,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub abandoned_at: Option<DateTime<Utc>>,
}

/// Query filter for the order actor.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    All,
    Active,
    ActiveByCustomer(String),
    /// Ready orders whose `ready_at` is at or before the cutoff. The
    /// sweeper's scan predicate.
    ReadyBefore(DateTime<Utc>),
}
