//! Draft-input persistence.
//!
//! Lets a client park partially filled indicator inputs between sessions.
//! Drafts are scoped to (owner, indicator), merged field by field, and live
//! entirely outside the authoritative calculation record.

use async_trait::async_trait;
use prospera_common::OwnerId;
use prospera_core::Indicator;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[async_trait]
pub trait DraftStore: Send + Sync {
    /// The owner's saved draft for `indicator`, if any.
    async fn load(&self, owner: &OwnerId, indicator: Indicator) -> Option<Map<String, Value>>;

    /// Merge `fields` into the draft, overwriting only the fields mentioned.
    /// Returns the merged draft.
    async fn save(
        &self,
        owner: &OwnerId,
        indicator: Indicator,
        fields: Map<String, Value>,
    ) -> Map<String, Value>;
}

/// In-memory draft store; the default and the one used in tests.
#[derive(Default)]
pub struct MemoryDraftStore {
    drafts: RwLock<HashMap<(OwnerId, Indicator), Map<String, Value>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn load(&self, owner: &OwnerId, indicator: Indicator) -> Option<Map<String, Value>> {
        let drafts = self.drafts.read().await;
        drafts.get(&(owner.clone(), indicator)).cloned()
    }

    async fn save(
        &self,
        owner: &OwnerId,
        indicator: Indicator,
        fields: Map<String, Value>,
    ) -> Map<String, Value> {
        let mut drafts = self.drafts.write().await;
        let draft = drafts.entry((owner.clone(), indicator)).or_default();
        for (key, value) in fields {
            draft.insert(key, value);
        }
        draft.clone()
    }
}
