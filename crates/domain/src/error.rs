//! Common error types used across the workspace.
//!
//! Each failure has its own typed error; [`MockServiceError`] wraps them via
//! `#[from]` so services can propagate with `?`.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum MockServiceError {
    /// A lookup key (route, city) is not in its table.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The request was well-formed but the operation cannot be performed.
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperationError),

    /// The request body could not be used as input.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// A lookup table has no entry for the requested key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of thing that was looked up (`"Route"`, `"City"`).
    pub entity: &'static str,
    /// The key as received from the caller.
    pub key: String,
}

/// Operations rejected on otherwise valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOperationError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Result is not a finite number")]
    NonFiniteResult,
}

/// Input that cannot be turned into operands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input: {reason}")]
pub struct InvalidInputError {
    pub reason: String,
}

impl InvalidInputError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
