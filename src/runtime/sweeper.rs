//! # Abandonment Sweeper
//!
//! A recurring background task that abandons Ready orders nobody picked up
//! within the configured timeout, returning their stock to the menu.
//!
//! The sweeper keeps no bookkeeping of its own: every tick recomputes
//! eligibility from the order actor's state, so a failed or missed tick is
//! self-healing: the next tick simply finds the same orders again. Sweep
//! failures are logged and never surfaced to request traffic.

use crate::clients::OrderClient;
use chrono::Utc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Sweeper tuning. Defaults: tick once per minute, abandon after 30 minutes.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often the sweep runs.
    pub tick: Duration,
    /// How long an order may sit in Ready before it is abandoned.
    pub abandon_after: Duration,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(60),
            abandon_after: Duration::from_secs(30 * 60),
        }
    }
}

impl SweeperConfig {
    /// Defaults, with the timeout overridable through the
    /// `ABANDON_AFTER_MINUTES` environment variable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(minutes) = std::env::var("ABANDON_AFTER_MINUTES")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
        {
            config.abandon_after = Duration::from_secs(minutes * 60);
        }
        config
    }
}

/// Spawns the sweeper loop. Abort the returned handle to stop it.
pub fn spawn(orders: OrderClient, config: SweeperConfig) -> tokio::task::JoinHandle<()> {
    tokio::spawn(run(orders, config))
}

async fn run(orders: OrderClient, config: SweeperConfig) {
    info!(
        tick = ?config.tick,
        abandon_after = ?config.abandon_after,
        "Abandonment sweeper started"
    );

    let abandon_after = chrono::Duration::from_std(config.abandon_after)
        .unwrap_or_else(|_| chrono::Duration::minutes(30));
    let mut ticker = interval(config.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let cutoff = Utc::now() - abandon_after;
        match orders.sweep_abandoned(cutoff).await {
            Ok(0) => debug!("Sweep found nothing to abandon"),
            Ok(swept) => info!(swept, "Abandoned stale orders"),
            Err(e) => warn!(error = %e, "Sweep failed, retrying on next tick"),
        }
    }
}
