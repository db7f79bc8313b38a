//! Typed error enum for the service layer.
//!
//! Each failure the orchestrator can produce is a distinct variant so the
//! boundary layer can map it to a transport status without inspecting text.

use thiserror::Error;
use weather_insights_cache::CacheError;
use weather_insights_core::ValidationError;
use weather_insights_storage::StorageError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required setting (provider credential) is missing.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Provider failed or does not know the city; the two are indistinguishable.
    #[error("Weather data not found for city {city}")]
    CityNotFound { city: String },

    /// Provider answered but the payload is unusable.
    #[error("invalid provider data: {0}")]
    InvalidProviderData(String),

    /// No persisted observations match.
    #[error("{}", no_history_message(.city, *.window_days))]
    NoHistory { city: String, window_days: Option<i64> },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    #[error("cache: {0}")]
    Cache(#[from] CacheError),
}

fn no_history_message(city: &str, window_days: Option<i64>) -> String {
    match window_days {
        Some(days) => format!("No weather history available for {city} in the last {days} days"),
        None => format!("No weather history available for {city}"),
    }
}

impl ServiceError {
    /// Whether the caller asked for something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CityNotFound { .. } | Self::NoHistory { .. })
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
