//! Error type for user operations.

use thiserror::Error;

/// Errors that can occur during signup or login.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// Malformed signup input (blank username or password).
    #[error("Invalid user: {0}")]
    Validation(String),

    /// Signup with a username that already exists.
    #[error("Username already exists")]
    UsernameTaken,

    /// Unknown user, wrong password, or wrong role at login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The actor or its channel went away.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
