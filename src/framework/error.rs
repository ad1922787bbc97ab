//! Transport-level errors shared by every actor and client.

/// Errors raised by the framework itself, as opposed to domain errors.
///
/// Domain errors cross the channel boundary wrapped in `EntityError`; the
/// resource clients downcast the box back to the concrete domain enum so
/// callers can match on variants instead of parsing strings.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
