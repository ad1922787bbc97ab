//! Tracing setup for the whole system.

/// Initializes structured logging with env-based filtering.
///
/// Verbosity is controlled through `RUST_LOG`:
/// - `RUST_LOG=info`: lifecycle events and actor operations
/// - `RUST_LOG=debug`: full request payloads
/// - `RUST_LOG=quickserve=debug`: debug for this crate only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
