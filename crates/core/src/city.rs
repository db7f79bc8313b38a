//! City name normalization, cache-key building and boundary validation.
//!
//! Persisted records keep the provider's display casing and history lookups
//! are case-insensitive in the store, so only the cache key is case-folded.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{CACHE_KEY_PREFIX, CITY_MAX_LEN, CITY_MIN_LEN};
use crate::error::ValidationError;

static CITY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s-]+$").unwrap());

/// Trim surrounding whitespace, preserving case.
#[must_use]
pub fn normalize_city(city: &str) -> &str {
    city.trim()
}

/// Cache key for the current-weather snapshot of `city`.
#[must_use]
pub fn cache_key(city: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{}", normalize_city(city).to_lowercase())
}

/// Validate a raw city parameter as received from a caller.
///
/// Accepts 2–50 characters made of ASCII letters, Latin-1 accented letters,
/// whitespace and hyphens.
pub fn validate_city(city: &str) -> Result<(), ValidationError> {
    if city.trim().is_empty() {
        return Err(ValidationError::EmptyCity);
    }
    let len = city.chars().count();
    if len < CITY_MIN_LEN {
        return Err(ValidationError::CityTooShort);
    }
    if len > CITY_MAX_LEN {
        return Err(ValidationError::CityTooLong);
    }
    if !CITY_REGEX.is_match(city) {
        return Err(ValidationError::InvalidCityCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_keeps_case() {
        assert_eq!(normalize_city("  São Paulo \t"), "São Paulo");
    }

    #[test]
    fn test_cache_key_is_case_insensitive() {
        assert_eq!(cache_key("Sao Paulo"), "weather:current:sao paulo");
        assert_eq!(cache_key("  sao PAULO "), cache_key("Sao Paulo"));
    }

    #[test]
    fn test_validate_accepts_accented_and_hyphenated() {
        assert!(validate_city("London").is_ok());
        assert!(validate_city("São Paulo").is_ok());
        assert!(validate_city("Aix-en-Provence").is_ok());
        assert!(validate_city("Zürich").is_ok());
    }

    #[test]
    fn test_validate_rejects_digits_and_symbols() {
        assert_eq!(validate_city("123"), Err(ValidationError::InvalidCityCharacters));
        assert_eq!(validate_city("Paris!"), Err(ValidationError::InvalidCityCharacters));
        assert_eq!(validate_city("東京都市"), Err(ValidationError::InvalidCityCharacters));
    }

    #[test]
    fn test_validate_length_bounds() {
        assert_eq!(validate_city("A"), Err(ValidationError::CityTooShort));
        assert_eq!(validate_city(&"A".repeat(51)), Err(ValidationError::CityTooLong));
        assert!(validate_city(&"A".repeat(50)).is_ok());
        assert!(validate_city("Ab").is_ok());
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert_eq!(validate_city("   "), Err(ValidationError::EmptyCity));
        assert_eq!(validate_city(""), Err(ValidationError::EmptyCity));
    }
}
