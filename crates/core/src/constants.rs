//! Shared constants for weather-insights.

/// Prefix of every current-weather cache key.
pub const CACHE_KEY_PREFIX: &str = "weather:current:";

/// Lifetime of a cached current-weather snapshot (10 minutes).
pub const CURRENT_WEATHER_CACHE_TTL_SECS: u64 = 600;

/// Upper bound on cached current-weather snapshots.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;

/// Trailing window used by the weekly summary.
pub const SUMMARY_WINDOW_DAYS: i64 = 7;

/// Condition recorded when the provider omits a description.
pub const UNKNOWN_CONDITION: &str = "unknown";

/// City name length bounds, in characters.
pub const CITY_MIN_LEN: usize = 2;
pub const CITY_MAX_LEN: usize = 50;

/// Pagination defaults and bounds for history queries.
pub const DEFAULT_HISTORY_PAGE: u32 = 1;
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;
pub const MAX_HISTORY_LIMIT: u32 = 100;

/// OpenWeatherMap API root used when `OPENWEATHER_BASE_URL` is not set.
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Outbound provider request timeout in seconds.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default bind address for `serve`.
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
