//! Weather provider client for weather-insights
//!
//! Fetches point-in-time observations from OpenWeatherMap and parses them
//! into a typed intermediate value. Every transport, status or payload
//! failure surfaces as a single [`ProviderError`].

mod client;
mod error;
mod types;

use async_trait::async_trait;

pub use client::OpenWeatherClient;
pub use error::ProviderError;
pub use types::{ProviderObservation, parse_current};

/// Source of current weather for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_current(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<ProviderObservation, ProviderError>;
}
