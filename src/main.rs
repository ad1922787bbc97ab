//! Demonstration entry point: boots the system, seeds a menu, walks one
//! order through the happy path and one through cancellation.

use quickserve::model::{
    Credentials, MenuItemUpsert, OrderStatus, PlaceOrder, RequestedLine, Role, UserCreate,
};
use quickserve::runtime::{setup_tracing, OrderSystem, SweeperConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order management system");
    let system = OrderSystem::new(SweeperConfig::from_env());

    // Seed the menu.
    let burger = system
        .menu_client
        .upsert(MenuItemUpsert {
            name: "Burger".to_string(),
            price: 8.50,
            available_qty: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    let fries = system
        .menu_client
        .upsert(MenuItemUpsert {
            name: "Fries".to_string(),
            price: 3.00,
            available_qty: 20,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(burger = %burger.id, fries = %fries.id, "Menu seeded");

    // Register and log in a customer.
    system
        .user_client
        .signup(UserCreate {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: Role::Customer,
        })
        .await
        .map_err(|e| e.to_string())?;
    let principal = system
        .user_client
        .login(Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: Role::Customer,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(user = %principal.user_id, "Customer logged in");

    // Place an order and walk it through the pipeline.
    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: principal.user_id.to_string(),
            is_priority: false,
            items: vec![
                RequestedLine {
                    menu_item_id: burger.id,
                    qty: 2,
                },
                RequestedLine {
                    menu_item_id: fries.id,
                    qty: 1,
                },
            ],
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order.id, total = order.total_price, "Order placed");

    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ] {
        let order = system
            .order_client
            .change_status(order.id, status)
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, status = %order.status, "Order advanced");
    }

    // A second order, cancelled while still queued: its stock comes back.
    let cancelled = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: principal.user_id.to_string(),
            is_priority: true,
            items: vec![RequestedLine {
                menu_item_id: burger.id,
                qty: 1,
            }],
        })
        .await
        .map_err(|e| e.to_string())?;
    system
        .order_client
        .change_status(cancelled.id, OrderStatus::Cancelled)
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %cancelled.id, "Order cancelled, stock restored");

    for item in system.menu_client.list().await.map_err(|e| e.to_string())? {
        info!(name = %item.name, stock = item.available_qty, "Final stock");
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
