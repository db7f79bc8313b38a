//! Read-through cache for weather-insights.
//!
//! String keys map to opaque serialized values with a per-entry TTL.

mod error;
mod memory;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::CacheError;
pub use memory::MemoryCache;

/// Key/value store with TTL eviction.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Value under `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key` for `ttl`, replacing any previous entry.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// Read and deserialize a JSON value.
///
/// An entry that does not deserialize yields `CacheError::Corrupt` so callers
/// can decide whether to treat it as a miss.
pub async fn get_json<T: DeserializeOwned>(
    cache: &dyn CacheStore,
    key: &str,
) -> Result<Option<T>, CacheError> {
    let Some(raw) = cache.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| CacheError::Corrupt { key: key.to_owned(), source })
}

/// Serialize `value` as JSON and store it.
pub async fn set_json<T: Serialize + Sync>(
    cache: &dyn CacheStore,
    key: &str,
    value: &T,
    ttl: Duration,
) -> Result<(), CacheError> {
    let payload = serde_json::to_string(value).map_err(CacheError::Serialize)?;
    cache.set(key, payload, ttl).await
}
