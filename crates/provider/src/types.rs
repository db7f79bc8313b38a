use serde::Deserialize;
use serde_json::Value;

use crate::error::ProviderError;

/// Reading extracted from a provider response.
///
/// Fields the provider may omit stay optional; deciding what a missing value
/// means is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderObservation {
    /// Canonical city name as the provider spells it.
    pub display_name: Option<String>,
    /// `None` when absent or not a number.
    pub temperature: Option<f64>,
    pub condition: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    main: Option<OwMain>,
    #[serde(default)]
    weather: Option<Vec<OwWeather>>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    #[serde(default)]
    temp: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    description: Option<String>,
}

/// Parse an OpenWeatherMap `/weather` body.
///
/// A body without a `weather` array is rejected; an empty array or an absent
/// description yields `condition: None`. A present description is kept as is.
pub fn parse_current(body: &str) -> Result<ProviderObservation, ProviderError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(|source| {
        ProviderError::JsonParse {
            context: format!("current weather response (body: {})", truncate(body, 200)),
            source,
        }
    })?;

    let weather = parsed.weather.ok_or_else(|| ProviderError::MissingField("weather".to_owned()))?;

    let condition = weather.into_iter().next().and_then(|w| w.description);
    let temperature = parsed.main.and_then(|m| m.temp).and_then(|t| t.as_f64());
    let display_name = parsed.name.filter(|n| !n.trim().is_empty());

    Ok(ProviderObservation { display_name, temperature, condition })
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
