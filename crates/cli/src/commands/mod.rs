pub(crate) mod query;
pub(crate) mod serve;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use weather_insights_cache::MemoryCache;
use weather_insights_core::AppConfig;
use weather_insights_provider::OpenWeatherClient;
use weather_insights_service::WeatherService;
use weather_insights_storage::StorageBackend;

/// Wire storage, cache and provider into a [`WeatherService`].
pub(crate) async fn build_service(config: &AppConfig) -> Result<Arc<WeatherService>> {
    tracing::debug!(config = ?config, "Building weather service");
    let storage = StorageBackend::connect(config.database_url.as_deref()).await?;
    tracing::info!(backend = storage.kind(), "History storage ready");

    let provider = OpenWeatherClient::new(
        &config.openweather_base_url,
        Duration::from_secs(config.provider_timeout_secs),
    )?;

    let service = WeatherService::new(
        Arc::new(storage),
        Arc::new(MemoryCache::with_capacity(config.cache_max_entries)),
        Arc::new(provider),
        config.openweather_api_key.clone(),
    )
    .with_cache_ttl(Duration::from_secs(config.cache_ttl_secs));

    Ok(Arc::new(service))
}
