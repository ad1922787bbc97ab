//! # Order Client
//!
//! The lifecycle engine's public surface: placement with race-safe stock
//! reservation, staff status changes, the sweeper's abandonment pass, and
//! the order query surface.

use crate::clients::MenuClient;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    MenuItem, MenuItemId, Order, OrderCreate, OrderFilter, OrderId, OrderLine, OrderStatus,
    PlaceOrder,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

/// A customer may hold at most this many orders in Placed/Preparing/Ready.
const MAX_ACTIVE_ORDERS_PER_CUSTOMER: usize = 2;

/// Client for the order actor plus the placement orchestration that spans
/// the menu and order actors.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menu: MenuClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, menu: MenuClient) -> Self {
        Self { inner, menu }
    }

    fn map_err(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_err) => *order_err,
                Err(other) => OrderError::ActorCommunication(other.to_string()),
            },
            other => OrderError::ActorCommunication(other.to_string()),
        }
    }

    /// Places an order: cap check, line merging, resolution, stock pre-check,
    /// per-line reservation, price snapshot, creation in `Placed`.
    ///
    /// The pre-check fails the whole order before any stock is touched. Each
    /// reservation after it commits independently and atomically in the menu
    /// actor; if one still fails the placement surfaces
    /// [`OrderError::StockConflict`] and does not roll back the lines
    /// already reserved.
    #[instrument(skip(self, params), fields(customer_id = %params.customer_id))]
    pub async fn place_order(&self, params: PlaceOrder) -> Result<Order, OrderError> {
        debug!(?params, "place_order called");

        let customer_id = params.customer_id.trim().to_string();
        if customer_id.is_empty() {
            return Err(OrderError::Validation(
                "customer id must not be empty".to_string(),
            ));
        }
        if params.items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one line".to_string(),
            ));
        }
        if params.items.iter().any(|line| line.qty == 0) {
            return Err(OrderError::Validation(
                "line quantity must be at least 1".to_string(),
            ));
        }

        if self.count_active(&customer_id).await? >= MAX_ACTIVE_ORDERS_PER_CUSTOMER {
            return Err(OrderError::TooManyActiveOrders { customer_id });
        }

        // Merge repeated item ids so "2x burger + 1x burger" is checked and
        // reserved as a single line of 3. First-seen order is preserved.
        let mut merged: Vec<(MenuItemId, u32)> = Vec::new();
        for line in &params.items {
            match merged.iter_mut().find(|(id, _)| *id == line.menu_item_id) {
                Some((_, qty)) => *qty += line.qty,
                None => merged.push((line.menu_item_id, line.qty)),
            }
        }

        // Resolve every item and pre-check stock before reserving anything,
        // so a shortfall anywhere fails the order with no side effects.
        let mut resolved: Vec<(MenuItem, u32)> = Vec::with_capacity(merged.len());
        for (id, qty) in merged {
            let item = self
                .menu
                .get(id)
                .await?
                .ok_or_else(|| OrderError::MenuItemNotFound(id.to_string()))?;
            if item.available_qty < qty {
                return Err(OrderError::InsufficientStock {
                    name: item.name,
                    requested: qty,
                    available: item.available_qty,
                });
            }
            resolved.push((item, qty));
        }

        // Reserve per item. A failure here means stock changed between the
        // pre-check and the reservation; it is surfaced, not compensated.
        for (item, qty) in &resolved {
            self.menu.reserve(item.id, *qty).await.map_err(|e| match e {
                crate::menu_actor::MenuError::InsufficientStock { .. } => OrderError::StockConflict,
                other => OrderError::from(other),
            })?;
        }

        // Snapshot names and prices now; later menu edits must not reach
        // into stored orders.
        let lines: Vec<OrderLine> = resolved
            .iter()
            .map(|(item, qty)| OrderLine {
                menu_item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                qty: *qty,
            })
            .collect();
        let total_price = lines
            .iter()
            .map(|line| line.unit_price * f64::from(line.qty))
            .sum();

        let id = self
            .inner
            .create(OrderCreate {
                customer_id,
                is_priority: params.is_priority,
                lines,
                total_price,
            })
            .await
            .map_err(Self::map_err)?;

        info!(order_id = %id, "Order placed");
        self.inner
            .get(id)
            .await
            .map_err(Self::map_err)?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Applies a staff status change. The transition-table check, timestamp
    /// stamping and any stock release run inside the order actor, serialized
    /// per order.
    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: OrderId,
        target: OrderStatus,
    ) -> Result<Order, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::Transition(target))
            .await
        {
            Ok(OrderActionResult::Transitioned(order)) => Ok(order),
            Ok(other) => unreachable!("Transition action must return Transitioned, got {other:?}"),
            Err(e) => Err(Self::map_err(e)),
        }
    }

    /// Abandons every Ready order whose `ready_at` is at or before the
    /// cutoff, releasing its stock. Returns how many orders were swept.
    #[instrument(skip(self))]
    pub async fn sweep_abandoned(&self, cutoff: DateTime<Utc>) -> Result<usize, OrderError> {
        let expired = self
            .inner
            .find(OrderFilter::ReadyBefore(cutoff))
            .await
            .map_err(Self::map_err)?;

        let mut swept = 0;
        for order in expired {
            match self
                .inner
                .perform_action(order.id, OrderAction::Abandon { cutoff })
                .await
            {
                Ok(OrderActionResult::Abandoned(true)) => swept += 1,
                // No longer eligible by the time the action ran.
                Ok(OrderActionResult::Abandoned(false)) => {}
                Ok(other) => unreachable!("Abandon action must return Abandoned, got {other:?}"),
                Err(e) => return Err(Self::map_err(e)),
            }
        }
        Ok(swept)
    }

    /// Number of Placed/Preparing/Ready orders held by the customer.
    pub async fn count_active(&self, customer_id: &str) -> Result<usize, OrderError> {
        let active = self
            .find(OrderFilter::ActiveByCustomer(customer_id.to_string()))
            .await?;
        Ok(active.len())
    }

    /// Active orders, priority first, then newest first.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.find(OrderFilter::Active).await?;
        orders.sort_by(|a, b| {
            b.is_priority
                .cmp(&a.is_priority)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(orders)
    }

    /// Every order regardless of status, newest first.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.find(OrderFilter::All).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        Self::map_err(e)
    }
}
