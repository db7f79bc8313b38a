//! PostgreSQL schema bootstrap for weather history.

use sqlx::PgPool;

/// Create the `weather_records` table and its lookup index if missing.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weather_records (
            id BIGSERIAL PRIMARY KEY,
            city TEXT NOT NULL,
            temperature DOUBLE PRECISION NOT NULL,
            condition TEXT NOT NULL,
            recorded_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_weather_city_recorded
         ON weather_records (LOWER(city), recorded_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
