//! In-process history backend.
//!
//! Used when no `DATABASE_URL` is configured and as the reference backend in
//! tests. Contents are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use weather_insights_core::{NewObservation, WeatherObservation};

use crate::error::StorageError;
use crate::traits::{HistoryQuery, HistoryStore};

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<WeatherObservation>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored observations across all cities.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

fn to_usize(value: u64, what: &str) -> Result<usize, StorageError> {
    usize::try_from(value).map_err(|_| StorageError::InvalidQuery(format!("{what} {value} too large")))
}

#[async_trait]
impl HistoryStore for MemoryStorage {
    async fn insert(&self, obs: NewObservation) -> Result<WeatherObservation, StorageError> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner.last_id.saturating_add(1);
        let stored = obs.into_stored(inner.last_id);
        inner.rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_city(
        &self,
        city: &str,
        query: HistoryQuery,
    ) -> Result<Vec<WeatherObservation>, StorageError> {
        let skip = to_usize(query.skip.unwrap_or(0), "skip")?;
        let take = match query.take {
            Some(take) => to_usize(take, "take")?,
            None => usize::MAX,
        };
        let needle = city.to_lowercase();

        let inner = self.inner.read().await;
        let mut matching: Vec<WeatherObservation> = inner
            .rows
            .iter()
            .filter(|row| row.city.to_lowercase() == needle)
            .filter(|row| query.since.is_none_or(|since| row.recorded_at >= since))
            .cloned()
            .collect();
        drop(inner);

        matching.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at).then(b.id.cmp(&a.id)));
        Ok(matching.into_iter().skip(skip).take(take).collect())
    }

    async fn count_by_city(&self, city: &str) -> Result<u64, StorageError> {
        let needle = city.to_lowercase();
        let inner = self.inner.read().await;
        let count = inner.rows.iter().filter(|row| row.city.to_lowercase() == needle).count();
        Ok(count as u64)
    }
}
