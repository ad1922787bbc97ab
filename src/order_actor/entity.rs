//! `ActorEntity` implementation for [`Order`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::clients::MenuClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

impl Order {
    /// Returns every reserved unit on this order to the catalog, one release
    /// per line. Shared by cancellation and abandonment so the two
    /// compensation paths cannot drift apart.
    async fn release_lines(&self, menu: &MenuClient) -> Result<(), OrderError> {
        for line in &self.lines {
            menu.release(line.menu_item_id, line.qty).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Filter = OrderFilter;
    type Context = MenuClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            customer_id: params.customer_id,
            is_priority: params.is_priority,
            status: OrderStatus::Placed,
            lines: params.lines,
            total_price: params.total_price,
            created_at: Utc::now(),
            ready_at: None,
            picked_up_at: None,
            cancelled_at: None,
            abandoned_at: None,
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::All => true,
            OrderFilter::Active => self.status.is_active(),
            OrderFilter::ActiveByCustomer(customer_id) => {
                self.status.is_active() && self.customer_id == *customer_id
            }
            OrderFilter::ReadyBefore(cutoff) => {
                self.status == OrderStatus::Ready
                    && self.ready_at.is_some_and(|ready_at| ready_at <= *cutoff)
            }
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &MenuClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        menu: &MenuClient,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Transition(target) => {
                if !self.status.can_transition_to(target) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: target,
                    });
                }

                let now = Utc::now();
                match target {
                    OrderStatus::Ready => self.ready_at = Some(now),
                    OrderStatus::PickedUp => self.picked_up_at = Some(now),
                    OrderStatus::Cancelled => self.cancelled_at = Some(now),
                    _ => {}
                }
                self.status = target;

                if target == OrderStatus::Cancelled {
                    self.release_lines(menu).await?;
                }

                Ok(OrderActionResult::Transitioned(self.clone()))
            }
            OrderAction::Abandon { cutoff } => {
                // Eligibility is recomputed here, not trusted from the scan:
                // the order may have been picked up since the sweeper saw it.
                let eligible = self.status == OrderStatus::Ready
                    && self.ready_at.is_some_and(|ready_at| ready_at <= cutoff);
                if !eligible {
                    return Ok(OrderActionResult::Abandoned(false));
                }

                self.abandoned_at = Some(Utc::now());
                self.status = OrderStatus::Abandoned;
                self.release_lines(menu).await?;

                info!(order_id = %self.id, "Order abandoned, stock restored");
                Ok(OrderActionResult::Abandoned(true))
            }
        }
    }
}
