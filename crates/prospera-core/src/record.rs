//! The wide calculation record and its legacy flat field mapping.
//!
//! One record exists per (owner, city, country). Leaf indicator data is held
//! in a typed map keyed by the closed [`Indicator`] enum; the flat
//! `<key>` / `<key>_standardized` / `<key>_comment` spelling that external
//! consumers key off is produced only at the serialization boundary, through
//! the naming map on `Indicator`.

use crate::catalog::Indicator;
use crate::indicators::Scored;
use chrono::{DateTime, Utc};
use prospera_common::OwnerId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stored attributes of one leaf indicator: the raw/actual measurement, the
/// standardized [0, 100] score, and the comment label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorEntry {
    pub raw: Option<f64>,
    pub standardized: Option<f64>,
    pub comment: Option<String>,
}

impl IndicatorEntry {
    pub fn is_empty(&self) -> bool {
        self.raw.is_none() && self.standardized.is_none() && self.comment.is_none()
    }

    /// Field-level merge: attributes present on `other` overwrite, absent
    /// attributes are left untouched.
    pub fn merge_from(&mut self, other: &IndicatorEntry) {
        if other.raw.is_some() {
            self.raw = other.raw;
        }
        if other.standardized.is_some() {
            self.standardized = other.standardized;
        }
        if other.comment.is_some() {
            self.comment = other.comment.clone();
        }
    }
}

impl From<&Scored> for IndicatorEntry {
    fn from(scored: &Scored) -> Self {
        IndicatorEntry {
            raw: Some(scored.actual),
            standardized: Some(scored.standardized),
            comment: Some(scored.comment.clone()),
        }
    }
}

/// All leaf indicator data on one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorFields(BTreeMap<Indicator, IndicatorEntry>);

impl IndicatorFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, indicator: Indicator) -> Option<&IndicatorEntry> {
        self.0.get(&indicator)
    }

    pub fn standardized(&self, indicator: Indicator) -> Option<f64> {
        self.0.get(&indicator).and_then(|e| e.standardized)
    }

    pub fn set(&mut self, indicator: Indicator, entry: IndicatorEntry) {
        if !entry.is_empty() {
            self.0.insert(indicator, entry);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Indicator, &IndicatorEntry)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Merge `patch` into self; indicators absent from the patch keep their
    /// data, present ones merge attribute by attribute.
    pub fn merge(&mut self, patch: &IndicatorFields) {
        for (indicator, entry) in patch.iter() {
            self.0.entry(indicator).or_default().merge_from(entry);
        }
    }

    /// Single-indicator fields from a calculation result.
    pub fn from_scored(scored: &Scored) -> Self {
        let mut fields = Self::new();
        fields.set(scored.indicator, IndicatorEntry::from(scored));
        fields
    }

    /// Flatten to the legacy wire/persisted spelling.
    pub fn to_flat(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for (indicator, entry) in self.iter() {
            if let Some(raw) = entry.raw {
                if let Some(n) = Number::from_f64(raw) {
                    map.insert(indicator.key().to_string(), Value::Number(n));
                }
            }
            if let Some(std) = entry.standardized {
                if let Some(n) = Number::from_f64(std) {
                    map.insert(indicator.standardized_field(), Value::Number(n));
                }
            }
            if let Some(comment) = &entry.comment {
                map.insert(indicator.comment_field(), Value::String(comment.clone()));
            }
        }
        map
    }

    /// Rebuild from a flat map, ignoring keys outside the catalog.
    pub fn from_flat(map: &Map<String, Value>) -> Self {
        let mut fields = Self::new();
        for indicator in Indicator::ALL {
            let entry = IndicatorEntry {
                raw: map.get(indicator.key()).and_then(Value::as_f64),
                standardized: map
                    .get(&indicator.standardized_field())
                    .and_then(Value::as_f64),
                comment: map
                    .get(&indicator.comment_field())
                    .and_then(Value::as_str)
                    .map(str::to_string),
            };
            fields.set(indicator, entry);
        }
        fields
    }
}

impl Serialize for IndicatorFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_flat().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IndicatorFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::deserialize(deserializer)?;
        Ok(Self::from_flat(&map))
    }
}

/// Partial update applied by an upsert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordPatch {
    pub city_name: Option<String>,
    pub fields: IndicatorFields,
}

/// One persisted calculation record, keyed by (owner, city, country).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub city: String,
    pub country: String,
    pub city_name: Option<String>,
    pub fields: IndicatorFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Flat representation: identity and timestamps beside the legacy-named
    /// indicator fields.
    pub fn to_flat_json(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), Value::String(self.id.to_string()));
        map.insert("owner_id".into(), Value::String(self.owner_id.to_string()));
        map.insert("city".into(), Value::String(self.city.clone()));
        map.insert("country".into(), Value::String(self.country.clone()));
        if let Some(name) = &self.city_name {
            map.insert("city_name".into(), Value::String(name.clone()));
        }
        map.insert("created_at".into(), Value::String(self.created_at.to_rfc3339()));
        map.insert("updated_at".into(), Value::String(self.updated_at.to_rfc3339()));
        map.extend(self.fields.to_flat());
        map
    }
}
