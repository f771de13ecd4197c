//! Postgres-backed persistent store.
//!
//! Schema extends the location/month key with the ayanamsa, since two
//! sidereal systems disagree on every rashi and nakshatra boundary and must
//! never share a cache row.

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::CacheError;
use crate::key::CacheKey;
use crate::record::MonthRecord;

/// Connects to Postgres and ensures the `planetary_events` table exists.
pub async fn connect(database_url: &str) -> Result<PgPool, CacheError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    init_schema(&pool).await?;
    tracing::info!("connected to persistent cache store");
    Ok(pool)
}

async fn init_schema(pool: &PgPool) -> Result<(), CacheError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planetary_events (
            id SERIAL PRIMARY KEY,
            location_hash VARCHAR(32) NOT NULL,
            month_start VARCHAR(7) NOT NULL,
            ayanamsa VARCHAR(16) NOT NULL,
            data JSONB NOT NULL,
            computed_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE(location_hash, month_start, ayanamsa)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_location_month_ayanamsa
        ON planetary_events(location_hash, month_start, ayanamsa)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get(pool: &PgPool, key: &CacheKey) -> Result<Option<MonthRecord>, CacheError> {
    let row: Option<PgRow> = sqlx::query(
        "SELECT data FROM planetary_events WHERE location_hash = $1 AND month_start = $2 AND ayanamsa = $3",
    )
    .bind(&key.loc_hash)
    .bind(&key.yyyy_mm)
    .bind(key.ayanamsa.as_token())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let data: String = row.try_get("data")?;
            tracing::debug!(loc_hash = %key.loc_hash, month = %key.yyyy_mm, "persistent cache hit");
            Ok(Some(MonthRecord::from_json(&data)?))
        }
        None => Ok(None),
    }
}

/// Upsert: replaces the record and bumps `computed_at` on conflict.
pub async fn put(pool: &PgPool, key: &CacheKey, record: &MonthRecord) -> Result<(), CacheError> {
    let data = record.to_json()?;
    sqlx::query(
        r#"
        INSERT INTO planetary_events (location_hash, month_start, ayanamsa, data)
        VALUES ($1, $2, $3, $4::jsonb)
        ON CONFLICT (location_hash, month_start, ayanamsa)
        DO UPDATE SET data = EXCLUDED.data, computed_at = NOW()
        "#,
    )
    .bind(&key.loc_hash)
    .bind(&key.yyyy_mm)
    .bind(key.ayanamsa.as_token())
    .bind(&data)
    .execute(pool)
    .await?;
    Ok(())
}
