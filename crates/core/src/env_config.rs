//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{
    CURRENT_WEATHER_CACHE_TTL_SECS, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_OPENWEATHER_BASE_URL,
    DEFAULT_PROVIDER_TIMEOUT_SECS,
};

pub const OPENWEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const OPENWEATHER_BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const CACHE_TTL_ENV: &str = "WEATHER_CACHE_TTL_SECS";
pub const CACHE_MAX_ENTRIES_ENV: &str = "WEATHER_CACHE_MAX_ENTRIES";
pub const PROVIDER_TIMEOUT_ENV: &str = "WEATHER_HTTP_TIMEOUT_SECS";

/// Parse a raw variable value with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Process-wide settings read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Provider credential. Absence is only an error on a cache miss.
    pub openweather_api_key: Option<String>,
    pub openweather_base_url: String,
    /// `None` selects the in-process history backend.
    pub database_url: Option<String>,
    pub cache_ttl_secs: u64,
    pub cache_max_entries: u64,
    pub provider_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openweather_api_key", &self.openweather_api_key.as_ref().map(|_| "***"))
            .field("openweather_base_url", &self.openweather_base_url)
            .field("database_url", &self.database_url.as_ref().map(|_| "***"))
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("cache_max_entries", &self.cache_max_entries)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openweather_api_key: None,
            openweather_base_url: DEFAULT_OPENWEATHER_BASE_URL.to_owned(),
            database_url: None,
            cache_ttl_secs: CURRENT_WEATHER_CACHE_TTL_SECS,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |var: &str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            openweather_api_key: non_blank(OPENWEATHER_API_KEY_ENV),
            openweather_base_url: non_blank(OPENWEATHER_BASE_URL_ENV)
                .unwrap_or(defaults.openweather_base_url),
            database_url: non_blank(DATABASE_URL_ENV),
            cache_ttl_secs: parse_with_default(
                CACHE_TTL_ENV,
                non_blank(CACHE_TTL_ENV),
                defaults.cache_ttl_secs,
            ),
            cache_max_entries: parse_with_default(
                CACHE_MAX_ENTRIES_ENV,
                non_blank(CACHE_MAX_ENTRIES_ENV),
                defaults.cache_max_entries,
            ),
            provider_timeout_secs: parse_with_default(
                PROVIDER_TIMEOUT_ENV,
                non_blank(PROVIDER_TIMEOUT_ENV),
                defaults.provider_timeout_secs,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_parse_valid_value() {
        let result: u32 = parse_with_default("X", Some("42".to_owned()), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_parse_invalid_value() {
        let result: u32 = parse_with_default("X", Some("banana".to_owned()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_missing_var() {
        let result: u32 = parse_with_default("X", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.cache_ttl_secs, 600);
        assert_eq!(cfg.cache_max_entries, 10_000);
        assert_eq!(cfg.openweather_base_url, "https://api.openweathermap.org/data/2.5");
        assert!(cfg.openweather_api_key.is_none());
    }

    #[test]
    fn test_config_reads_all_vars() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("OPENWEATHER_API_KEY", "secret"),
            ("OPENWEATHER_BASE_URL", "http://localhost:9999"),
            ("DATABASE_URL", "postgres://u:p@localhost/weather"),
            ("WEATHER_CACHE_TTL_SECS", "60"),
            ("WEATHER_CACHE_MAX_ENTRIES", "250"),
            ("WEATHER_HTTP_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(cfg.openweather_api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.openweather_base_url, "http://localhost:9999");
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://u:p@localhost/weather"));
        assert_eq!(cfg.cache_ttl_secs, 60);
        assert_eq!(cfg.cache_max_entries, 250);
        assert_eq!(cfg.provider_timeout_secs, 3);
    }

    #[test]
    fn test_config_blank_key_is_unset() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("OPENWEATHER_API_KEY", "   ")]));
        assert!(cfg.openweather_api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("OPENWEATHER_API_KEY", "secret"),
            ("DATABASE_URL", "postgres://u:hunter2@db/weather"),
        ]));
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("hunter2"));
    }
}
