//! Core error types for the FitTrack application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fitness tracker.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An invariant the application maintains was found broken in storage.
    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True for uniqueness, foreign-key and check constraint breaches.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Error::Database(
                DatabaseError::UniqueViolation(_)
                    | DatabaseError::ForeignKeyViolation(_)
                    | DatabaseError::CheckViolation(_)
            )
        )
    }

    /// True when the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Error::Database(
                DatabaseError::ConnectionFailed(_) | DatabaseError::PoolCreationFailed(_)
            )
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Database(DatabaseError::NotFound(_)))
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create the pool or check a connection out of it.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A CHECK constraint rejected the row.
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// A multi-statement write failed and was rolled back as a whole.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_classification() {
        let dup = Error::Database(DatabaseError::UniqueViolation("friends".into()));
        let fk = Error::Database(DatabaseError::ForeignKeyViolation("users".into()));
        let check = Error::Database(DatabaseError::CheckViolation("weight".into()));
        let tx = Error::Database(DatabaseError::TransactionFailed("boom".into()));

        assert!(dup.is_constraint_violation());
        assert!(fk.is_constraint_violation());
        assert!(check.is_constraint_violation());
        assert!(!tx.is_constraint_violation());
    }

    #[test]
    fn test_unavailable_classification() {
        let err = Error::Database(DatabaseError::ConnectionFailed("refused".into()));
        assert!(err.is_unavailable());
        assert!(!err.is_not_found());

        let integrity = Error::DataIntegrity("two active goals".into());
        assert!(!integrity.is_unavailable());
    }
}
