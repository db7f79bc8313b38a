//! PostgreSQL storage backend using sqlx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use weather_insights_core::{
    NewObservation, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS, WeatherObservation,
};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::traits::{HistoryQuery, HistoryStore};

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, bootstrapping the schema.
    pub async fn from_pool(pool: PgPool) -> Result<Self, StorageError> {
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

fn to_i64(value: u64, what: &str) -> Result<i64, StorageError> {
    i64::try_from(value).map_err(|_| StorageError::InvalidQuery(format!("{what} {value} too large")))
}

pub(crate) fn row_to_observation(row: &PgRow) -> Result<WeatherObservation, StorageError> {
    let recorded_at: DateTime<Utc> = row.try_get("recorded_at")?;
    Ok(WeatherObservation {
        id: row.try_get("id")?,
        city: row.try_get("city")?,
        temperature: row.try_get("temperature")?,
        condition: row.try_get("condition")?,
        recorded_at,
    })
}

#[async_trait]
impl HistoryStore for PgStorage {
    async fn insert(&self, obs: NewObservation) -> Result<WeatherObservation, StorageError> {
        let row = sqlx::query(
            "INSERT INTO weather_records (city, temperature, condition, recorded_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, city, temperature, condition, recorded_at",
        )
        .bind(&obs.city)
        .bind(obs.temperature)
        .bind(&obs.condition)
        .bind(obs.recorded_at)
        .fetch_one(&self.pool)
        .await?;
        row_to_observation(&row)
    }

    async fn find_by_city(
        &self,
        city: &str,
        query: HistoryQuery,
    ) -> Result<Vec<WeatherObservation>, StorageError> {
        let skip = query.skip.map(|v| to_i64(v, "skip")).transpose()?;
        let take = query.take.map(|v| to_i64(v, "take")).transpose()?;
        let rows = sqlx::query(
            "SELECT id, city, temperature, condition, recorded_at
             FROM weather_records
             WHERE LOWER(city) = LOWER($1)
               AND ($2::timestamptz IS NULL OR recorded_at >= $2)
             ORDER BY recorded_at DESC, id DESC
             OFFSET $3 LIMIT $4",
        )
        .bind(city)
        .bind(query.since)
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_observation).collect()
    }

    async fn count_by_city(&self, city: &str) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM weather_records WHERE LOWER(city) = LOWER($1)")
                .bind(city)
                .fetch_one(&self.pool)
                .await?;
        u64::try_from(count).map_err(|_| StorageError::DataCorruption(format!("negative count {count}")))
    }
}
