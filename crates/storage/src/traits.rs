//! Storage trait abstraction for weather history.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use weather_insights_core::{NewObservation, WeatherObservation};

use crate::error::StorageError;

/// Filter and window for [`HistoryStore::find_by_city`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Inclusive lower bound on `recorded_at`.
    pub since: Option<DateTime<Utc>>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

impl HistoryQuery {
    #[must_use]
    pub fn since(since: DateTime<Utc>) -> Self {
        Self { since: Some(since), ..Self::default() }
    }

    #[must_use]
    pub fn page(skip: u64, take: u64) -> Self {
        Self { since: None, skip: Some(skip), take: Some(take) }
    }
}

/// Append-only store of weather observations.
///
/// City matching is a case-insensitive exact match; no partial matching.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist a new observation and return it with its assigned id.
    async fn insert(&self, obs: NewObservation) -> Result<WeatherObservation, StorageError>;

    /// Observations for `city`, most recent first.
    async fn find_by_city(
        &self,
        city: &str,
        query: HistoryQuery,
    ) -> Result<Vec<WeatherObservation>, StorageError>;

    /// Count of all observations for `city`, ignoring any time window.
    async fn count_by_city(&self, city: &str) -> Result<u64, StorageError>;
}
