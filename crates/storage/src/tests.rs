use chrono::{Duration, Utc};
use weather_insights_core::NewObservation;

use crate::{HistoryQuery, HistoryStore, MemoryStorage, StorageBackend};

fn reading(city: &str, temperature: f64, hours_ago: i64) -> NewObservation {
    NewObservation {
        city: city.to_owned(),
        temperature,
        condition: "clear sky".to_owned(),
        recorded_at: Utc::now() - Duration::hours(hours_ago),
    }
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let storage = MemoryStorage::new();
    let first = storage.insert(reading("London", 10.0, 0)).await.unwrap();
    let second = storage.insert(reading("London", 11.0, 0)).await.unwrap();
    assert!(second.id > first.id);
    assert_eq!(first.city, "London");
    assert_eq!(storage.len().await, 2);
}

#[tokio::test]
async fn test_find_is_case_insensitive_exact_match() {
    let storage = MemoryStorage::new();
    storage.insert(reading("São Paulo", 28.0, 1)).await.unwrap();
    storage.insert(reading("Paulo", 15.0, 1)).await.unwrap();

    let found = storage.find_by_city("são paulo", HistoryQuery::default()).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].city, "São Paulo");

    let partial = storage.find_by_city("Sao", HistoryQuery::default()).await.unwrap();
    assert!(partial.is_empty());
}

#[tokio::test]
async fn test_find_orders_most_recent_first() {
    let storage = MemoryStorage::new();
    storage.insert(reading("Paris", 1.0, 30)).await.unwrap();
    storage.insert(reading("Paris", 2.0, 1)).await.unwrap();
    storage.insert(reading("Paris", 3.0, 10)).await.unwrap();

    let found = storage.find_by_city("Paris", HistoryQuery::default()).await.unwrap();
    let temps: Vec<f64> = found.iter().map(|o| o.temperature).collect();
    assert_eq!(temps, vec![2.0, 3.0, 1.0]);
}

#[tokio::test]
async fn test_find_since_is_inclusive_lower_bound() {
    let storage = MemoryStorage::new();
    let old = storage.insert(reading("Oslo", -3.0, 24 * 8)).await.unwrap();
    let edge = storage.insert(reading("Oslo", 0.0, 24 * 2)).await.unwrap();

    let found =
        storage.find_by_city("Oslo", HistoryQuery::since(edge.recorded_at)).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, edge.id);
    assert_ne!(found[0].id, old.id);
}

#[tokio::test]
async fn test_find_pages_with_skip_and_take() {
    let storage = MemoryStorage::new();
    for i in 0..25 {
        storage.insert(reading("Berlin", f64::from(i), i64::from(i))).await.unwrap();
    }

    let page_one = storage.find_by_city("Berlin", HistoryQuery::page(0, 10)).await.unwrap();
    let page_three = storage.find_by_city("Berlin", HistoryQuery::page(20, 10)).await.unwrap();
    let past_end = storage.find_by_city("Berlin", HistoryQuery::page(30, 10)).await.unwrap();

    assert_eq!(page_one.len(), 10);
    assert_eq!(page_one[0].temperature, 0.0);
    assert_eq!(page_three.len(), 5);
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_count_ignores_window_and_other_cities() {
    let storage = MemoryStorage::new();
    storage.insert(reading("Rome", 20.0, 24 * 30)).await.unwrap();
    storage.insert(reading("ROME", 21.0, 1)).await.unwrap();
    storage.insert(reading("Milan", 19.0, 1)).await.unwrap();

    assert_eq!(storage.count_by_city("rome").await.unwrap(), 2);
    assert_eq!(storage.count_by_city("Naples").await.unwrap(), 0);
}

#[tokio::test]
async fn test_backend_dispatches_to_memory() {
    let backend = StorageBackend::connect(None).await.unwrap();
    assert_eq!(backend.kind(), "memory");

    let stored = backend.insert(reading("Lisbon", 22.5, 0)).await.unwrap();
    let found = backend.find_by_city("LISBON", HistoryQuery::default()).await.unwrap();
    assert_eq!(found, vec![stored]);
    assert_eq!(backend.count_by_city("lisbon").await.unwrap(), 1);
}
