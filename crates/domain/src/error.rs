//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HolocronError`] via `#[from]`.

use crate::id::ParseIdError;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HolocronError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflicting record")]
    Conflict(#[from] ConflictError),

    /// Failure inside a storage adapter. The source is kept for logging only.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before it reaches the store.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("invalid {field}: {source}")]
    InvalidId {
        field: &'static str,
        source: ParseIdError,
    },

    #[error("a favorite must reference exactly one planet or person")]
    InvalidFavoriteTarget,

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// A lookup that found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A write rejected by a store constraint.
#[derive(Debug, thiserror::Error)]
pub enum ConflictError {
    #[error("{entity} already exists")]
    Duplicate { entity: &'static str },

    #[error("{entity} references a record that does not exist")]
    MissingReference { entity: &'static str },

    #[error("{entity} violates a storage constraint")]
    Constraint { entity: &'static str },
}

/// Reject an empty required string.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] when `value` is empty or whitespace.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
