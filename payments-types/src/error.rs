//! Error types for the payment service.

use crate::domain::{DecodeError, EncodeError, PaymentId};
use crate::validation::ValidationErrors;

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Payment has no key to store it under")]
    MissingKey,

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Caller-supplied data is invalid.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Payment id must not be set on creation")]
    IdAlreadySet,

    #[error("Payment id must not be empty")]
    EmptyId,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

impl From<ValidationErrors> for InputError {
    fn from(errors: ValidationErrors) -> Self {
        InputError::Validation(errors)
    }
}

/// Application-level errors returned by the payment service.
///
/// The three variants are mutually exclusive and map cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Payment not found: {0}")]
    NotFound(PaymentId),

    #[error("Storage error: {0}")]
    Storage(RepoError),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Storage(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Input(InputError::Validation(errors))
    }
}
