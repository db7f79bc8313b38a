//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be mapped into a domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Pagination or filter value that cannot be expressed by the backend.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Schema bootstrap failure.
    #[error("migration error: {0}")]
    Migration(String),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { index, source } => {
                Self::DataCorruption(format!("column {index}: {source}"))
            },
            other => Self::Database(other),
        }
    }
}
