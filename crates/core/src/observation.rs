use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HISTORY_LIMIT, DEFAULT_HISTORY_PAGE, MAX_HISTORY_LIMIT};
use crate::error::ValidationError;

/// One persisted weather reading for a city at a point in time.
///
/// Immutable once stored; the history store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub id: i64,
    /// Display-cased city name as reported by the provider.
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    pub condition: String,
    pub recorded_at: DateTime<Utc>,
}

/// Insert payload for the history store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewObservation {
    pub city: String,
    pub temperature: f64,
    pub condition: String,
    pub recorded_at: DateTime<Utc>,
}

impl NewObservation {
    #[must_use]
    pub fn into_stored(self, id: i64) -> WeatherObservation {
        WeatherObservation {
            id,
            city: self.city,
            temperature: self.temperature,
            condition: self.condition,
            recorded_at: self.recorded_at,
        }
    }
}

/// Aggregate over the trailing summary window. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub city: String,
    pub average_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
}

/// One page of history, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub data: Vec<WeatherObservation>,
    /// Count of all observations for the city, independent of the page window.
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl HistoryPage {
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

/// Validated page/limit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::PageOutOfRange);
        }
        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            return Err(ValidationError::LimitOutOfRange);
        }
        Ok(Self { page, limit })
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of records preceding this page.
    #[must_use]
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: DEFAULT_HISTORY_PAGE, limit: DEFAULT_HISTORY_LIMIT }
    }
}
