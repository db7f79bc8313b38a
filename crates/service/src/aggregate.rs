//! Statistics derived from persisted observations.

use weather_insights_core::{WeatherObservation, WeatherSummary};

/// Round to 2 decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean/min/max over `records`, which must be ordered most recent first.
///
/// The summary takes its city from the most recent record, falling back to
/// `fallback_city` when that record carries none. Returns `None` for an empty
/// slice.
#[must_use]
pub fn summarize(fallback_city: &str, records: &[WeatherObservation]) -> Option<WeatherSummary> {
    let first = records.first()?;

    let mut sum = 0.0;
    let mut max_temp = f64::NEG_INFINITY;
    let mut min_temp = f64::INFINITY;
    for record in records {
        sum += record.temperature;
        max_temp = max_temp.max(record.temperature);
        min_temp = min_temp.min(record.temperature);
    }
    let mean = sum / records.len() as f64;
    // Sub-cent readings can round past an extreme.
    let average_temp = round2(mean).clamp(min_temp, max_temp);

    let city = if first.city.trim().is_empty() { fallback_city } else { first.city.as_str() };

    Some(WeatherSummary { city: city.to_owned(), average_temp, max_temp, min_temp })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn obs(city: &str, temperature: f64) -> WeatherObservation {
        WeatherObservation {
            id: 0,
            city: city.to_owned(),
            temperature,
            condition: "clear sky".to_owned(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(25.0), 25.0);
        assert_eq!(round2(20.2895), 20.29);
        assert_eq!(round2(-3.456), -3.46);
    }

    #[test]
    fn test_summarize_example() {
        let records = vec![obs("Paris", 20.0), obs("Paris", 30.0), obs("Paris", 25.0)];
        let summary = summarize("paris", &records).unwrap();
        assert_eq!(summary.average_temp, 25.0);
        assert_eq!(summary.max_temp, 30.0);
        assert_eq!(summary.min_temp, 20.0);
        assert_eq!(summary.city, "Paris");
    }

    #[test]
    fn test_summarize_empty_is_none() {
        assert!(summarize("Paris", &[]).is_none());
    }

    #[test]
    fn test_summarize_uses_most_recent_city_or_fallback() {
        let records = vec![obs("São Paulo", 1.0), obs("sao paulo", 2.0)];
        assert_eq!(summarize("sao paulo", &records).unwrap().city, "São Paulo");

        let records = vec![obs("", 1.0)];
        assert_eq!(summarize("Lima", &records).unwrap().city, "Lima");
    }

    #[test]
    fn test_summarize_ordering_invariant_holds() {
        let sets: [&[f64]; 5] = [
            &[12.0],
            &[-5.5, 0.0, 3.25],
            &[20.005, 20.005, 20.005],
            &[1.111, 2.222, 3.333, 4.444],
            &[-40.0, 50.0],
        ];
        for temps in sets {
            let records: Vec<_> = temps.iter().map(|t| obs("X", *t)).collect();
            let summary = summarize("X", &records).unwrap();
            assert!(summary.min_temp <= summary.average_temp, "{temps:?}");
            assert!(summary.average_temp <= summary.max_temp, "{temps:?}");
        }
    }
}
