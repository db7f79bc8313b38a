use std::time::Duration;

use async_trait::async_trait;

use crate::WeatherProvider;
use crate::error::ProviderError;
use crate::types::{ProviderObservation, parse_current, truncate};

/// Client for the OpenWeatherMap current-weather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenWeatherClient {
    /// Creates a client against `base_url` with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<ProviderObservation, ProviderError> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| ProviderError::HttpRequest(e.without_url()))?;

        let status = response.status();
        let body =
            response.text().await.map_err(|e| ProviderError::HttpRequest(e.without_url()))?;

        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, 200).to_owned(),
            });
        }

        parse_current(&body)
    }
}
