use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use weather_insights_cache::{CacheError, CacheStore, get_json, set_json};
use weather_insights_core::{
    CURRENT_WEATHER_CACHE_TTL_SECS, HistoryPage, NewObservation, Pagination, SUMMARY_WINDOW_DAYS,
    UNKNOWN_CONDITION, WeatherObservation, WeatherSummary, cache_key, normalize_city,
};
use weather_insights_provider::WeatherProvider;
use weather_insights_storage::{HistoryQuery, HistoryStore};

use crate::ServiceError;
use crate::aggregate::summarize;

pub struct WeatherService {
    pub(crate) history: Arc<dyn HistoryStore>,
    pub(crate) cache: Arc<dyn CacheStore>,
    pub(crate) provider: Arc<dyn WeatherProvider>,
    pub(crate) api_key: Option<String>,
    pub(crate) cache_ttl: Duration,
}

impl WeatherService {
    #[must_use]
    pub fn new(
        history: Arc<dyn HistoryStore>,
        cache: Arc<dyn CacheStore>,
        provider: Arc<dyn WeatherProvider>,
        api_key: Option<String>,
    ) -> Self {
        if api_key.is_none() {
            tracing::warn!("No provider API key configured; cache misses will fail");
        }
        Self {
            history,
            cache,
            provider,
            api_key,
            cache_ttl: Duration::from_secs(CURRENT_WEATHER_CACHE_TTL_SECS),
        }
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Current weather for `city`, served from cache when fresh.
    ///
    /// On a miss the provider is queried, the reading is appended to history
    /// and the stored record is cached under the normalized key. A provider
    /// failure of any kind is reported as [`ServiceError::CityNotFound`].
    pub async fn get_current_weather(
        &self,
        city: &str,
    ) -> Result<WeatherObservation, ServiceError> {
        let normalized = normalize_city(city);
        let key = cache_key(city);

        match get_json::<WeatherObservation>(self.cache.as_ref(), &key).await {
            Ok(Some(cached)) => {
                tracing::debug!(city = %normalized, key = %key, "Current weather cache hit");
                return Ok(cached);
            },
            Ok(None) => {},
            Err(e @ CacheError::Corrupt { .. }) => {
                tracing::warn!(key = %key, error = %e, "Discarding unreadable cache entry");
            },
            Err(e) => return Err(e.into()),
        }

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("Provider API key is not configured");
            ServiceError::NotConfigured("OpenWeatherMap API key is not configured".to_owned())
        })?;

        let reading = match self.provider.fetch_current(normalized, api_key).await {
            Ok(reading) => reading,
            Err(e) => {
                if e.is_unknown_city() {
                    tracing::warn!(city = %normalized, "Provider does not know city");
                } else {
                    tracing::error!(city = %normalized, error = %e, "Provider request failed");
                }
                return Err(ServiceError::CityNotFound { city: normalized.to_owned() });
            },
        };

        let temperature = reading.temperature.ok_or_else(|| {
            tracing::error!(city = %normalized, "Provider response has no numeric temperature");
            ServiceError::InvalidProviderData(format!(
                "temperature missing or not a number for {normalized}"
            ))
        })?;

        let display_name = reading
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| normalized.to_owned());

        let stored = self
            .history
            .insert(NewObservation {
                city: display_name,
                temperature,
                condition: reading.condition.unwrap_or_else(|| UNKNOWN_CONDITION.to_owned()),
                recorded_at: Utc::now(),
            })
            .await?;

        set_json(self.cache.as_ref(), &key, &stored, self.cache_ttl).await?;
        tracing::info!(
            city = %stored.city,
            id = stored.id,
            temperature = stored.temperature,
            "Recorded current weather"
        );
        Ok(stored)
    }

    /// Mean/min/max over the last [`SUMMARY_WINDOW_DAYS`] days of history.
    pub async fn get_weekly_summary(&self, city: &str) -> Result<WeatherSummary, ServiceError> {
        let normalized = normalize_city(city);
        let since = Utc::now() - chrono::Duration::days(SUMMARY_WINDOW_DAYS);

        let records = self.history.find_by_city(normalized, HistoryQuery::since(since)).await?;

        summarize(normalized, &records).ok_or_else(|| ServiceError::NoHistory {
            city: normalized.to_owned(),
            window_days: Some(SUMMARY_WINDOW_DAYS),
        })
    }

    /// One page of history, most recent first, with the city's total count.
    ///
    /// Fails with [`ServiceError::NoHistory`] only when the city has no
    /// records at all; a page past the end comes back empty.
    pub async fn get_history(
        &self,
        city: &str,
        pagination: Pagination,
    ) -> Result<HistoryPage, ServiceError> {
        let normalized = normalize_city(city);
        let query = HistoryQuery::page(pagination.skip(), u64::from(pagination.limit()));

        let (data, total) = tokio::try_join!(
            self.history.find_by_city(normalized, query),
            self.history.count_by_city(normalized),
        )?;

        if total == 0 && data.is_empty() {
            return Err(ServiceError::NoHistory { city: normalized.to_owned(), window_days: None });
        }

        tracing::debug!(
            city = %normalized,
            page = pagination.page(),
            returned = data.len(),
            total,
            "Fetched weather history page"
        );
        Ok(HistoryPage { data, total, page: pagination.page(), limit: pagination.limit() })
    }
}
