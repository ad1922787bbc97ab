//! Lifecycle actions on an order.

use crate::model::{Order, OrderStatus};
use chrono::{DateTime, Utc};

/// Domain actions on a single order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// A staff-requested status change, validated against the transition
    /// table. Cancellation releases the reserved stock.
    Transition(OrderStatus),
    /// The sweeper's exclusive path to `Abandoned`. Eligibility (status
    /// Ready, `ready_at` at or before the cutoff) is re-checked inside the
    /// actor, so an outdated scan result degrades to a no-op.
    Abandon { cutoff: DateTime<Utc> },
}

/// Results, 1:1 with [`OrderAction`].
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The updated order after a successful transition.
    Transitioned(Order),
    /// Whether the order was actually abandoned (`false` when it was no
    /// longer eligible by the time the action ran).
    Abandoned(bool),
}
