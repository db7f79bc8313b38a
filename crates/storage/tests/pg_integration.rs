//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p weather-insights-storage -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::{Duration, Utc};
use weather_insights_core::NewObservation;
use weather_insights_storage::{HistoryQuery, HistoryStore, PgStorage};

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

/// Letters-only city name unique per test run.
fn unique_city(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let suffix: String = nanos
        .to_string()
        .chars()
        .map(|c| char::from(b'a' + c.to_digit(10).unwrap_or(0) as u8))
        .collect();
    format!("{prefix}{suffix}")
}

fn reading(city: &str, temperature: f64, hours_ago: i64) -> NewObservation {
    NewObservation {
        city: city.to_owned(),
        temperature,
        condition: "overcast clouds".to_owned(),
        recorded_at: Utc::now() - Duration::hours(hours_ago),
    }
}

#[tokio::test]
#[ignore]
async fn pg_insert_returns_stored_row() {
    let storage = create_pg_storage().await;
    let city = unique_city("Insert");

    let stored = storage.insert(reading(&city, 17.25, 0)).await.unwrap();
    assert!(stored.id > 0);
    assert_eq!(stored.city, city);
    assert!((stored.temperature - 17.25).abs() < f64::EPSILON);
}

#[tokio::test]
#[ignore]
async fn pg_find_is_case_insensitive_and_ordered() {
    let storage = create_pg_storage().await;
    let city = unique_city("Order");

    storage.insert(reading(&city, 1.0, 5)).await.unwrap();
    storage.insert(reading(&city, 2.0, 1)).await.unwrap();

    let found =
        storage.find_by_city(&city.to_uppercase(), HistoryQuery::default()).await.unwrap();
    let temps: Vec<f64> = found.iter().map(|o| o.temperature).collect();
    assert_eq!(temps, vec![2.0, 1.0]);
}

#[tokio::test]
#[ignore]
async fn pg_since_window_and_count() {
    let storage = create_pg_storage().await;
    let city = unique_city("Window");

    storage.insert(reading(&city, 5.0, 24 * 10)).await.unwrap();
    storage.insert(reading(&city, 6.0, 24)).await.unwrap();

    let since = Utc::now() - Duration::days(7);
    let recent = storage.find_by_city(&city, HistoryQuery::since(since)).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(storage.count_by_city(&city).await.unwrap(), 2);
}

#[tokio::test]
#[ignore]
async fn pg_pagination_window() {
    let storage = create_pg_storage().await;
    let city = unique_city("Page");

    for i in 0..7 {
        storage.insert(reading(&city, f64::from(i), i64::from(i))).await.unwrap();
    }

    let second = storage.find_by_city(&city, HistoryQuery::page(5, 5)).await.unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].temperature, 5.0);
}
