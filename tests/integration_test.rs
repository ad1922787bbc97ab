//! Full-system tests: real actors, real wiring, end-to-end flows.

use quickserve::model::{
    MenuItem, MenuItemUpsert, OrderStatus, PlaceOrder, RequestedLine, Role, UserCreate,
};
use quickserve::order_actor::OrderError;
use quickserve::runtime::{OrderSystem, SweeperConfig};
use quickserve::user_actor::UserError;

async fn seed_item(system: &OrderSystem, name: &str, price: f64, qty: u32) -> MenuItem {
    system
        .menu_client
        .upsert(MenuItemUpsert {
            name: name.to_string(),
            price,
            available_qty: qty,
        })
        .await
        .expect("Failed to upsert menu item")
}

fn line(item: &MenuItem, qty: u32) -> RequestedLine {
    RequestedLine {
        menu_item_id: item.id,
        qty,
    }
}

#[tokio::test]
async fn placement_reserves_stock_and_snapshots_prices() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 2).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 2)],
        })
        .await
        .expect("Failed to place order");

    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.total_price, 10.00);
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].name, "Burger");
    assert_eq!(order.lines[0].unit_price, 5.00);
    assert_eq!(order.lines[0].qty, 2);

    let stock = system
        .menu_client
        .list()
        .await
        .expect("Failed to list menu");
    assert_eq!(stock[0].available_qty, 0, "Placement must consume stock");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn cancellation_restores_every_reserved_unit() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 2).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 2)],
        })
        .await
        .expect("Failed to place order");

    let cancelled = system
        .order_client
        .change_status(order.id, OrderStatus::Cancelled)
        .await
        .expect("Failed to cancel order");
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert!(cancelled.cancelled_at.is_some());

    let stock = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(stock[0].available_qty, 2, "Cancellation must restore stock");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn duplicate_lines_are_merged_before_reservation() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Fries", 2.00, 5).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 2), line(&item, 1)],
        })
        .await
        .expect("Failed to place order");

    assert_eq!(order.lines.len(), 1, "Repeated item ids collapse to one line");
    assert_eq!(order.lines[0].qty, 3);
    assert_eq!(order.total_price, 6.00);

    let stock = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(stock[0].available_qty, 2);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn failed_precheck_leaves_stock_untouched() {
    let system = OrderSystem::new(SweeperConfig::default());
    let burger = seed_item(&system, "Burger", 5.00, 10).await;
    let fries = seed_item(&system, "Fries", 2.00, 1).await;

    // Second line exceeds stock, so the whole order fails before any
    // reservation happens.
    let result = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&burger, 2), line(&fries, 5)],
        })
        .await;

    match result {
        Err(OrderError::InsufficientStock {
            name,
            requested,
            available,
        }) => {
            assert_eq!(name, "Fries");
            assert_eq!(requested, 5);
            assert_eq!(available, 1);
        }
        other => panic!("Expected InsufficientStock, got {other:?}"),
    }

    let stock = system.menu_client.list().await.expect("Failed to list");
    let burger_stock = stock.iter().find(|i| i.name == "Burger").unwrap();
    assert_eq!(burger_stock.available_qty, 10, "No partial reservation");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn third_active_order_is_refused() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 100).await;

    for _ in 0..2 {
        system
            .order_client
            .place_order(PlaceOrder {
                customer_id: "alice".to_string(),
                is_priority: false,
                items: vec![line(&item, 1)],
            })
            .await
            .expect("Failed to place order");
    }

    let third = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await;
    assert!(matches!(
        third,
        Err(OrderError::TooManyActiveOrders { .. })
    ));

    // A different customer is unaffected by alice's cap.
    system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "bob".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Other customers must not be capped");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn cap_frees_up_once_an_order_terminates() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 100).await;

    let first = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Failed to place order");
    system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Failed to place order");

    system
        .order_client
        .change_status(first.id, OrderStatus::Cancelled)
        .await
        .expect("Failed to cancel");

    system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Cancelled orders must not count against the cap");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn skipping_a_stage_is_rejected() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 5).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Failed to place order");

    let result = system
        .order_client
        .change_status(order.id, OrderStatus::Ready)
        .await;
    match result {
        Err(OrderError::InvalidTransition { from, to }) => {
            assert_eq!(from, OrderStatus::Placed);
            assert_eq!(to, OrderStatus::Ready);
        }
        other => panic!("Expected InvalidTransition, got {other:?}"),
    }

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn terminal_orders_reject_all_transitions() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 5).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Failed to place order");
    system
        .order_client
        .change_status(order.id, OrderStatus::Cancelled)
        .await
        .expect("Failed to cancel");

    for target in [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ] {
        let result = system.order_client.change_status(order.id, target).await;
        assert!(
            matches!(result, Err(OrderError::InvalidTransition { .. })),
            "Cancelled order accepted transition to {target}"
        );
    }

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn happy_path_stamps_each_timestamp() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 5).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Failed to place order");

    let preparing = system
        .order_client
        .change_status(order.id, OrderStatus::Preparing)
        .await
        .expect("Placed -> Preparing");
    assert!(preparing.ready_at.is_none());

    let ready = system
        .order_client
        .change_status(order.id, OrderStatus::Ready)
        .await
        .expect("Preparing -> Ready");
    assert!(ready.ready_at.is_some());

    let picked_up = system
        .order_client
        .change_status(order.id, OrderStatus::PickedUp)
        .await
        .expect("Ready -> PickedUp");
    assert!(picked_up.picked_up_at.is_some());
    assert_eq!(picked_up.status, OrderStatus::PickedUp);

    // Pickup is not a cancellation: stock stays consumed.
    let stock = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(stock[0].available_qty, 4);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn menu_edits_never_reach_stored_orders() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 10).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 2)],
        })
        .await
        .expect("Failed to place order");
    assert_eq!(order.total_price, 10.00);

    // Reprice the burger; the stored order must keep its snapshot.
    seed_item(&system, "Burger", 9.99, 10).await;

    let stored = system
        .order_client
        .list_all()
        .await
        .expect("Failed to list orders")
        .into_iter()
        .find(|o| o.id == order.id)
        .expect("Order missing");
    assert_eq!(stored.total_price, 10.00);
    assert_eq!(stored.lines[0].unit_price, 5.00);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn active_listing_is_priority_first_then_newest() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 100).await;

    let mut ids = Vec::new();
    for (customer, priority) in [("a", false), ("b", true), ("c", false), ("d", true)] {
        let order = system
            .order_client
            .place_order(PlaceOrder {
                customer_id: customer.to_string(),
                is_priority: priority,
                items: vec![line(&item, 1)],
            })
            .await
            .expect("Failed to place order");
        ids.push(order.id);
    }

    let active = system
        .order_client
        .list_active()
        .await
        .expect("Failed to list active");
    assert_eq!(active.len(), 4);
    // Priority orders first (newest of them leading), then the rest.
    assert_eq!(active[0].id, ids[3]);
    assert_eq!(active[1].id, ids[1]);
    assert_eq!(active[2].id, ids[2]);
    assert_eq!(active[3].id, ids[0]);

    // A terminal order leaves the active listing but stays in history.
    system
        .order_client
        .change_status(ids[3], OrderStatus::Cancelled)
        .await
        .expect("Failed to cancel");
    let active = system
        .order_client
        .list_active()
        .await
        .expect("Failed to list active");
    assert_eq!(active.len(), 3);
    let all = system
        .order_client
        .list_all()
        .await
        .expect("Failed to list all");
    assert_eq!(all.len(), 4);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn unknown_menu_item_fails_placement() {
    let system = OrderSystem::new(SweeperConfig::default());
    seed_item(&system, "Burger", 5.00, 5).await;

    let result = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![RequestedLine {
                menu_item_id: quickserve::model::MenuItemId(999),
                qty: 1,
            }],
        })
        .await;
    assert!(matches!(result, Err(OrderError::MenuItemNotFound(_))));

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn zero_quantity_lines_are_rejected() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 5).await;

    let result = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 0)],
        })
        .await;
    assert!(matches!(result, Err(OrderError::Validation(_))));

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn upsert_replaces_by_name_instead_of_duplicating() {
    let system = OrderSystem::new(SweeperConfig::default());

    let first = seed_item(&system, "Burger", 5.00, 5).await;
    let second = seed_item(&system, "Burger", 7.00, 9).await;
    assert_eq!(first.id, second.id, "Upsert must reuse the existing item");
    assert_eq!(second.price, 7.00);
    assert_eq!(second.available_qty, 9);

    let items = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(items.len(), 1);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn concurrent_reservations_never_oversell() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 5).await;

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let menu = system.menu_client.clone();
        let id = item.id;
        tasks.push(tokio::spawn(async move { menu.reserve(id, 1).await }));
    }

    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            successes += 1;
        }
    }
    assert_eq!(successes, 5, "Exactly the available stock may be reserved");

    let stock = system.menu_client.list().await.expect("Failed to list");
    assert_eq!(stock[0].available_qty, 0);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn release_then_reserve_round_trips() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 5).await;

    system
        .menu_client
        .reserve(item.id, 3)
        .await
        .expect("Failed to reserve");
    let restored = system
        .menu_client
        .release(item.id, 3)
        .await
        .expect("Failed to release");
    assert_eq!(restored, 5);

    system
        .menu_client
        .reserve(item.id, 5)
        .await
        .expect("Full stock must be reservable again");

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn racing_transitions_let_exactly_one_win() {
    let system = OrderSystem::new(SweeperConfig::default());
    let item = seed_item(&system, "Burger", 5.00, 5).await;

    let order = system
        .order_client
        .place_order(PlaceOrder {
            customer_id: "alice".to_string(),
            is_priority: false,
            items: vec![line(&item, 1)],
        })
        .await
        .expect("Failed to place order");

    // Both requests target Placed -> Preparing; the loser is re-evaluated
    // against the new status and must fail.
    let first = {
        let client = system.order_client.clone();
        let id = order.id;
        tokio::spawn(async move { client.change_status(id, OrderStatus::Preparing).await })
    };
    let second = {
        let client = system.order_client.clone();
        let id = order.id;
        tokio::spawn(async move { client.change_status(id, OrderStatus::Preparing).await })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "Exactly one racing transition may succeed");
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(OrderError::InvalidTransition { .. }))));

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn signup_login_and_role_checks() {
    let system = OrderSystem::new(SweeperConfig::default());

    system
        .user_client
        .signup(UserCreate {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: Role::Customer,
        })
        .await
        .expect("Failed to sign up");

    let duplicate = system
        .user_client
        .signup(UserCreate {
            username: "alice".to_string(),
            password: "other".to_string(),
            role: Role::Staff,
        })
        .await;
    assert_eq!(duplicate, Err(UserError::UsernameTaken));

    let principal = system
        .user_client
        .login(quickserve::model::Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: Role::Customer,
        })
        .await
        .expect("Failed to log in");
    assert_eq!(principal.username, "alice");
    assert_eq!(principal.role, Role::Customer);

    let wrong_role = system
        .user_client
        .login(quickserve::model::Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: Role::Staff,
        })
        .await;
    assert_eq!(wrong_role, Err(UserError::InvalidCredentials));

    let wrong_password = system
        .user_client
        .login(quickserve::model::Credentials {
            username: "alice".to_string(),
            password: "nope".to_string(),
            role: Role::Customer,
        })
        .await;
    assert_eq!(wrong_password, Err(UserError::InvalidCredentials));

    system.shutdown().await.expect("Failed to shutdown");
}
