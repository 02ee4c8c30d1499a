// Error types for database operations

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error types for database connection and query operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error occurred during database connection attempt
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A foreign key rejected the write, e.g. deleting a referenced location
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A unique index rejected the write
    #[error("Duplicate value: {0}")]
    Duplicate(String),

    /// A guarded update matched no row because the record changed underneath it
    #[error("Stale write: {0}")]
    StaleWrite(String),
}

impl From<DbErr> for DbError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DbError::ConstraintViolation(msg),
            Some(SqlErr::UniqueConstraintViolation(msg)) => DbError::Duplicate(msg),
            _ => DbError::QueryError(err.to_string()),
        }
    }
}
