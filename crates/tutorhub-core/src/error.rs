//! Domain-level error types.

use thiserror::Error;

/// Field validation failures. Raised synchronously at construction or
/// mutation and never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is empty or insecure")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be exactly {expected} characters")]
    WrongLength { field: &'static str, expected: usize },

    #[error("{field} must be hexadecimal")]
    NotHex { field: &'static str },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
}

/// Repository-level errors.
///
/// Absence on reads is not an error: lookups return `Option`/`Vec`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Entity not found")]
    NotFound,

    /// Insert invoked on an entity that already carries a store id.
    #[error("Entity has already been persisted")]
    AlreadyPersisted,

    /// Update or delete invoked on an entity that was never persisted.
    #[error("Entity has not been persisted")]
    NotPersisted,

    /// A stored row no longer passes domain validation.
    #[error("Stored row failed validation: {0}")]
    Corrupt(String),
}

/// Session store errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
