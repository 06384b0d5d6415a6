//! In-memory record store with the same merge semantics as Postgres.
//!
//! Used by unit tests and local development; the jsonb `||` merge on flat
//! fields is replicated by the attribute-level `IndicatorFields::merge`.

use crate::error::Result;
use crate::store::RecordStore;
use async_trait::async_trait;
use chrono::Utc;
use prospera_common::OwnerId;
use prospera_core::{CalculationRecord, RecordPatch};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

type NaturalKey = (OwnerId, String, String);

#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<NaturalKey, CalculationRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn find(
        &self,
        owner: &OwnerId,
        city: &str,
        country: &str,
    ) -> Result<Option<CalculationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&(owner.clone(), city.to_string(), country.to_string()))
            .cloned())
    }

    async fn upsert(
        &self,
        owner: &OwnerId,
        city: &str,
        country: &str,
        patch: RecordPatch,
    ) -> Result<CalculationRecord> {
        let key = (owner.clone(), city.to_string(), country.to_string());
        let mut records = self.records.write().await;
        let now = Utc::now();
        let record = records.entry(key).or_insert_with(|| CalculationRecord {
            id: Uuid::new_v4(),
            owner_id: owner.clone(),
            city: city.to_string(),
            country: country.to_string(),
            city_name: None,
            fields: Default::default(),
            created_at: now,
            updated_at: now,
        });
        if patch.city_name.is_some() {
            record.city_name = patch.city_name;
        }
        record.fields.merge(&patch.fields);
        record.updated_at = now;
        Ok(record.clone())
    }

    async fn list(&self, owner: &OwnerId) -> Result<Vec<CalculationRecord>> {
        let records = self.records.read().await;
        let mut owned: Vec<CalculationRecord> = records
            .values()
            .filter(|r| &r.owner_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    async fn get(&self, id: Uuid, owner: &OwnerId) -> Result<Option<CalculationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.id == id && &r.owner_id == owner)
            .cloned())
    }

    async fn delete(&self, id: Uuid, owner: &OwnerId) -> Result<bool> {
        let mut records = self.records.write().await;
        let key = records
            .iter()
            .find(|(_, r)| r.id == id && &r.owner_id == owner)
            .map(|(k, _)| k.clone());
        match key {
            Some(k) => {
                records.remove(&k);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
