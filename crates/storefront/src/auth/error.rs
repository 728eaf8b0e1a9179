//! Account error types.

use thiserror::Error;

use crate::persist::StorageError;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was left blank.
    #[error("all fields are required")]
    MissingFields,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] phone_city_core::EmailError),

    /// Password too short.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Unknown email or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// The account store could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
