//! Runtime orchestration: actor wiring, the abandonment sweeper, and
//! tracing setup.

pub mod order_system;
pub mod sweeper;
pub mod tracing;

pub use order_system::OrderSystem;
pub use sweeper::SweeperConfig;
pub use tracing::setup_tracing;
