//! System wiring: creates the actors, injects their dependencies, starts
//! the sweeper, and coordinates shutdown.

use crate::clients::{MenuClient, OrderClient, UserClient};
use crate::runtime::sweeper::{self, SweeperConfig};
use crate::{menu_actor, order_actor, user_actor};
use tracing::{error, info};

/// The running system: three resource actors plus the sweeper task.
///
/// Actors are created first without dependencies, then wired at spawn time:
/// the order actor receives a [`MenuClient`] clone as its context so
/// compensating stock releases happen inside the order actor's turn. Only
/// the order→menu edge exists, so the dependency graph is acyclic and
/// shutdown-by-channel-closure terminates cleanly.
pub struct OrderSystem {
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub user_client: UserClient,

    sweeper: tokio::task::JoinHandle<()>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts every actor and the sweeper.
    pub fn new(config: SweeperConfig) -> Self {
        let (menu_actor, menu_client) = menu_actor::new();
        let menu_handle = tokio::spawn(menu_actor.run(()));

        let (user_actor, user_client) = user_actor::new();
        let user_handle = tokio::spawn(user_actor.run(()));

        let (order_actor, order_resource_client) = order_actor::new();
        let order_client = OrderClient::new(order_resource_client, menu_client.clone());
        let order_handle = tokio::spawn(order_actor.run(menu_client.clone()));

        let sweeper = sweeper::spawn(order_client.clone(), config);

        Self {
            menu_client,
            order_client,
            user_client,
            sweeper,
            handles: vec![menu_handle, user_handle, order_handle],
        }
    }

    /// Stops the sweeper, closes every actor channel by dropping the
    /// clients, and waits for the actors to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The sweeper holds client clones that would keep channels open.
        self.sweeper.abort();
        let _ = self.sweeper.await;

        // Dropping the clients closes the senders; each actor's recv loop
        // ends once every clone (including the order actor's context) is
        // gone.
        drop(self.order_client);
        drop(self.menu_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
