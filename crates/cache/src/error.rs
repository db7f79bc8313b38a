//! Typed error enum for the cache crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cached value for {key} is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize cache value: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Transport failure of an out-of-process backend; the in-process cache never returns it.
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
}

impl CacheError {
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
