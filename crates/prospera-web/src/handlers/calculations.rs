//! Calculation record endpoints.
//!
//! Writes go through the store's atomic upsert; reads attach the derived
//! sub-dimension/dimension/CPI rollups, which are never persisted.

use crate::auth::Owner;
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::Json;
use prospera_core::{
    aggregate, compute, CalculationRecord, Indicator, IndicatorFields, RawInputs, RecordPatch,
    Scored,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Flat record plus derived rollups, the shape every read responds with.
fn with_rollups(record: &CalculationRecord) -> Map<String, Value> {
    let mut map = record.to_flat_json();
    map.extend(aggregate(&record.fields).to_flat());
    map
}

#[derive(Debug, Deserialize)]
pub struct UpsertBody {
    pub city: Option<String>,
    pub country: Option<String>,
    pub city_name: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

fn require_key(body_city: Option<String>, body_country: Option<String>) -> Result<(String, String), ApiError> {
    let city = body_city
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("city is required".to_string()))?;
    let country = body_country
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("country is required".to_string()))?;
    Ok((city, country))
}

/// Standardized scores arriving pre-computed must already sit on the
/// [0, 100] scale; anything outside would poison every rollup above it.
fn require_scores_in_range(fields: &IndicatorFields) -> Result<(), ApiError> {
    for (indicator, entry) in fields.iter() {
        if let Some(score) = entry.standardized {
            if !(0.0..=100.0).contains(&score) {
                return Err(ApiError::BadRequest(format!(
                    "{} must lie in [0, 100], got {score}",
                    indicator.standardized_field()
                )));
            }
        }
    }
    Ok(())
}

/// POST /api/calculations — merge flat indicator fields into the owner's
/// record for (city, country).
pub async fn upsert(
    State(state): State<SharedState>,
    Owner(owner): Owner,
    Json(body): Json<UpsertBody>,
) -> Result<Json<Value>, ApiError> {
    let (city, country) = require_key(body.city, body.country)?;
    let fields = IndicatorFields::from_flat(&body.fields);
    if fields.is_empty() {
        return Err(ApiError::BadRequest(
            "no recognized indicator fields in request".to_string(),
        ));
    }
    require_scores_in_range(&fields)?;

    let patch = RecordPatch {
        city_name: body.city_name,
        fields,
    };
    let record = state.store.upsert(&owner, &city, &country, patch).await?;
    tracing::info!(owner = %owner, city, country, "record upserted");
    Ok(Json(Value::Object(with_rollups(&record))))
}

#[derive(Debug, Deserialize)]
pub struct SubmitBody {
    pub city: Option<String>,
    pub country: Option<String>,
    pub city_name: Option<String>,
    #[serde(default)]
    pub inputs: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub scored: Scored,
    pub record: Map<String, Value>,
}

/// POST /api/calculations/{indicator} — validate raw inputs, run the one
/// normalizer, and merge the result into the record.
pub async fn submit(
    State(state): State<SharedState>,
    Owner(owner): Owner,
    Path(key): Path<String>,
    Json(body): Json<SubmitBody>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let indicator = Indicator::from_key(&key)
        .ok_or_else(|| ApiError::NotFound(format!("unknown indicator: {key}")))?;
    let (city, country) = require_key(body.city, body.country)?;

    let inputs = RawInputs::from(body.inputs);
    let scored = compute(indicator, &inputs)?;

    let patch = RecordPatch {
        city_name: body.city_name,
        fields: IndicatorFields::from_scored(&scored),
    };
    let record = state.store.upsert(&owner, &city, &country, patch).await?;
    tracing::info!(
        owner = %owner,
        city,
        country,
        indicator = indicator.key(),
        standardized = scored.standardized,
        "indicator scored"
    );

    Ok(Json(SubmitResponse {
        scored,
        record: with_rollups(&record),
    }))
}

/// GET /api/calculations — the owner's records, most recently updated first.
pub async fn list(
    State(state): State<SharedState>,
    Owner(owner): Owner,
) -> Result<Json<Value>, ApiError> {
    let records = state.store.list(&owner).await?;
    let body: Vec<Value> = records
        .iter()
        .map(|r| Value::Object(with_rollups(r)))
        .collect();
    Ok(Json(Value::Array(body)))
}

/// GET /api/calculations/{id} — one record with rollups.
///
/// A malformed id, a missing record, and someone else's record are all the
/// same 404.
pub async fn detail(
    State(state): State<SharedState>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let not_found = || ApiError::NotFound(format!("calculation not found: {id}"));
    let id = Uuid::parse_str(&id).map_err(|_| not_found())?;
    let record = state.store.get(id, &owner).await?.ok_or_else(not_found)?;
    Ok(Json(Value::Object(with_rollups(&record))))
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<Uuid>,
}

/// DELETE /api/calculations?id={id}
pub async fn delete(
    State(state): State<SharedState>,
    Owner(owner): Owner,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = query
        .id
        .ok_or_else(|| ApiError::BadRequest("id query parameter is required".to_string()))?;
    if !state.store.delete(id, &owner).await? {
        return Err(ApiError::NotFound(format!("calculation not found: {id}")));
    }
    tracing::info!(owner = %owner, %id, "record deleted");
    Ok(Json(json!({ "deleted": true })))
}
