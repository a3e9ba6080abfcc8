//! Storage-specific error types for SQLite operations.
//!
//! Diesel and r2d2 failures are wrapped here and converted to the
//! database-agnostic errors of `fittrack_core` at the crate boundary.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use fittrack_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A core error raised inside a write job. Kept intact so its
    /// classification survives the transaction wrapper.
    #[error(transparent)]
    Core(Error),
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::Core(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(e) => diesel_to_core(e),
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::Core(e) => e,
        }
    }
}

fn diesel_to_core(err: DieselError) -> Error {
    match err {
        DieselError::NotFound => {
            Error::Database(DatabaseError::NotFound("Record not found".to_string()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            Error::Database(DatabaseError::UniqueViolation(info.message().to_string()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => Error::Database(
            DatabaseError::ForeignKeyViolation(info.message().to_string()),
        ),
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
            Error::Database(DatabaseError::CheckViolation(info.message().to_string()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            Error::Database(DatabaseError::ConnectionFailed(info.message().to_string()))
        }
        other => Error::Database(DatabaseError::QueryFailed(other.to_string())),
    }
}

/// Extension trait for converting pool checkout Results to core Results.
pub trait IntoCore<T> {
    fn into_core(self) -> fittrack_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> fittrack_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
