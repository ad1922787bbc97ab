//! Abandonment sweeping, both the direct sweep call and the background loop.

use chrono::Utc;
use quickserve::model::{MenuItemUpsert, OrderId, OrderStatus, PlaceOrder, RequestedLine};
use quickserve::runtime::{OrderSystem, SweeperConfig};
use std::time::Duration;

async fn place_ready_order(system: &OrderSystem, customer: &str) -> OrderId {
    let item = system
        .menu_client
        .upsert(MenuItemUpsert {
            name: format!("Special for {customer}"),
            price: 4.00,
            available_qty: 3,
        })
        .await
        .expect("Failed to upsert menu item");

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: customer.to_string(),
            is_priority: false,
            items: vec![RequestedLine {
                menu_item_id: item.id,
                qty: 3,
            }],
        })
        .await
        .expect("Failed to place order");

    system
        .order_client
        .change_status(order.id, OrderStatus::Preparing)
        .await
        .expect("Placed -> Preparing");
    system
        .order_client
        .change_status(order.id, OrderStatus::Ready)
        .await
        .expect("Preparing -> Ready");
    order.id
}

async fn status_of(system: &OrderSystem, id: OrderId) -> OrderStatus {
    system
        .order_client
        .list_all()
        .await
        .expect("Failed to list orders")
        .into_iter()
        .find(|o| o.id == id)
        .expect("Order missing")
        .status
}

#[tokio::test]
async fn sweep_abandons_expired_ready_orders_and_restores_stock() {
    let system = OrderSystem::new(SweeperConfig::default());
    let id = place_ready_order(&system, "alice").await;

    // Cutoff at "now" makes the just-readied order eligible.
    let swept = system
        .order_client
        .sweep_abandoned(Utc::now())
        .await
        .expect("Failed to sweep");
    assert_eq!(swept, 1);
    assert_eq!(status_of(&system, id).await, OrderStatus::Abandoned);

    let stock = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(stock[0].available_qty, 3, "Abandonment must restore stock");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn sweep_leaves_fresh_ready_orders_alone() {
    let system = OrderSystem::new(SweeperConfig::default());
    let id = place_ready_order(&system, "alice").await;

    // Cutoff well before ready_at: nothing has timed out yet.
    let cutoff = Utc::now() - chrono::Duration::minutes(30);
    let swept = system
        .order_client
        .sweep_abandoned(cutoff)
        .await
        .expect("Failed to sweep");
    assert_eq!(swept, 0);
    assert_eq!(status_of(&system, id).await, OrderStatus::Ready);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn sweep_skips_orders_not_in_ready() {
    let system = OrderSystem::new(SweeperConfig::default());
    let id = place_ready_order(&system, "alice").await;
    system
        .order_client
        .change_status(id, OrderStatus::PickedUp)
        .await
        .expect("Ready -> PickedUp");

    let swept = system
        .order_client
        .sweep_abandoned(Utc::now())
        .await
        .expect("Failed to sweep");
    assert_eq!(swept, 0);
    assert_eq!(status_of(&system, id).await, OrderStatus::PickedUp);

    // Picked-up orders keep their stock consumed.
    let stock = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(stock[0].available_qty, 0);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn abandoned_orders_reject_further_transitions() {
    let system = OrderSystem::new(SweeperConfig::default());
    let id = place_ready_order(&system, "alice").await;
    system
        .order_client
        .sweep_abandoned(Utc::now())
        .await
        .expect("Failed to sweep");

    let result = system
        .order_client
        .change_status(id, OrderStatus::PickedUp)
        .await;
    assert!(result.is_err(), "Abandoned is terminal");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn background_loop_sweeps_without_being_asked() {
    let system = OrderSystem::new(SweeperConfig {
        tick: Duration::from_millis(20),
        abandon_after: Duration::ZERO,
    });
    let id = place_ready_order(&system, "alice").await;

    // Give the loop a few ticks to notice the expired order.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        if status_of(&system, id).await == OrderStatus::Abandoned {
            break;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "Sweeper never abandoned the order"
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let stock = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(stock[0].available_qty, 3);

    system.shutdown().await.expect("Failed to shutdown");
}
