//! History storage for weather-insights
//!
//! Append-only weather observations, queried by city (case-insensitive) with
//! an optional lower time bound and offset/limit pagination.

mod backend;
mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use traits::{HistoryQuery, HistoryStore};
