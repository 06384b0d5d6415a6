//! The record-store contract consumed by the web layer.

use crate::error::Result;
use async_trait::async_trait;
use prospera_common::OwnerId;
use prospera_core::{CalculationRecord, RecordPatch};
use uuid::Uuid;

/// Keyed access to calculation records, always scoped to one owner.
///
/// Cross-owner lookups uniformly come back as "not found" (`None` / `false`)
/// so callers cannot distinguish a missing record from someone else's.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Record for the natural key, if the owner has one.
    async fn find(
        &self,
        owner: &OwnerId,
        city: &str,
        country: &str,
    ) -> Result<Option<CalculationRecord>>;

    /// Merge `patch` into the record for (owner, city, country), creating it
    /// if absent. Atomic: concurrent upserts for the same key cannot produce
    /// duplicates or lose fields. Fields not mentioned by the patch are
    /// never removed. `updated_at` advances on every call.
    async fn upsert(
        &self,
        owner: &OwnerId,
        city: &str,
        country: &str,
        patch: RecordPatch,
    ) -> Result<CalculationRecord>;

    /// All of the owner's records, most recently updated first.
    async fn list(&self, owner: &OwnerId) -> Result<Vec<CalculationRecord>>;

    /// One record by id, if owned by `owner`.
    async fn get(&self, id: Uuid, owner: &OwnerId) -> Result<Option<CalculationRecord>>;

    /// Delete by id if owned by `owner`; returns whether a record went away.
    async fn delete(&self, id: Uuid, owner: &OwnerId) -> Result<bool>;
}
