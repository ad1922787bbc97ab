//! Stock operations on a menu item.

/// Domain actions beyond CRUD. Both mutate the stock counter and are
/// evaluated in one actor turn, which gives them their atomicity.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Conditionally decrement stock: succeeds only if the full quantity is
    /// available, otherwise fails without touching the counter.
    Reserve(u32),
    /// Increment stock back. The compensating half of a reservation; the
    /// catalog does not deduplicate releases, idempotency is the caller's
    /// concern.
    Release(u32),
}

/// Results, 1:1 with [`MenuAction`].
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    Reserved,
    /// Carries the stock level after the increment.
    Released(u32),
}
