//! Domain clients wrapping the raw resource clients.
//!
//! Each wrapper exposes the operations of one resource in domain vocabulary
//! and recovers typed domain errors from the framework's boxed error
//! envelope.

pub mod menu_client;
pub mod order_client;
pub mod user_client;

pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use user_client::UserClient;
