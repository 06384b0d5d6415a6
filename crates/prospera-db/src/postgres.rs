//! Postgres-backed record store.
//!
//! The upsert is a single `INSERT … ON CONFLICT DO UPDATE` whose jsonb merge
//! (`fields || EXCLUDED.fields`) happens inside the statement, so two
//! concurrent submissions for the same (owner, city, country) key can
//! neither create duplicates nor lose each other's fields.

use crate::error::Result;
use crate::store::RecordStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prospera_common::OwnerId;
use prospera_core::{CalculationRecord, IndicatorFields, RecordPatch};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_COLUMNS: &str =
    "id, owner_id, city, country, city_name, fields, created_at, updated_at";

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(8)
            .connect(database_url)
            .await?;
        sqlx::migrate!("../../migrations").run(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: Uuid,
    owner_id: String,
    city: String,
    country: String,
    city_name: Option<String>,
    fields: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RecordRow> for CalculationRecord {
    fn from(row: RecordRow) -> Self {
        let fields = row
            .fields
            .as_object()
            .map(IndicatorFields::from_flat)
            .unwrap_or_default();
        CalculationRecord {
            id: row.id,
            owner_id: OwnerId::new(row.owner_id),
            city: row.city,
            country: row.country,
            city_name: row.city_name,
            fields,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find(
        &self,
        owner: &OwnerId,
        city: &str,
        country: &str,
    ) -> Result<Option<CalculationRecord>> {
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM calculations \
             WHERE owner_id = $1 AND city = $2 AND country = $3"
        ))
        .bind(owner.as_str())
        .bind(city)
        .bind(country)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(CalculationRecord::from))
    }

    async fn upsert(
        &self,
        owner: &OwnerId,
        city: &str,
        country: &str,
        patch: RecordPatch,
    ) -> Result<CalculationRecord> {
        let fields = serde_json::to_value(&patch.fields)?;
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "INSERT INTO calculations \
                 (id, owner_id, city, country, city_name, fields, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, now(), now()) \
             ON CONFLICT (owner_id, city, country) DO UPDATE SET \
                 fields = calculations.fields || EXCLUDED.fields, \
                 city_name = COALESCE(EXCLUDED.city_name, calculations.city_name), \
                 updated_at = now() \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(owner.as_str())
        .bind(city)
        .bind(country)
        .bind(patch.city_name)
        .bind(fields)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(owner = %owner, city, country, "record upserted");
        Ok(row.into())
    }

    async fn list(&self, owner: &OwnerId) -> Result<Vec<CalculationRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM calculations \
             WHERE owner_id = $1 ORDER BY updated_at DESC"
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(CalculationRecord::from).collect())
    }

    async fn get(&self, id: Uuid, owner: &OwnerId) -> Result<Option<CalculationRecord>> {
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM calculations WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id)
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(CalculationRecord::from))
    }

    async fn delete(&self, id: Uuid, owner: &OwnerId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
