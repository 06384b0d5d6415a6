//! Draft-input endpoints.

use crate::auth::Owner;
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::Json;
use prospera_core::Indicator;
use serde_json::{Map, Value};

fn indicator_for(key: &str) -> Result<Indicator, ApiError> {
    Indicator::from_key(key).ok_or_else(|| ApiError::NotFound(format!("unknown indicator: {key}")))
}

/// GET /api/drafts/{indicator} — the owner's saved draft, `{}` if none.
pub async fn load(
    State(state): State<SharedState>,
    Owner(owner): Owner,
    Path(key): Path<String>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let indicator = indicator_for(&key)?;
    let draft = state.drafts.load(&owner, indicator).await.unwrap_or_default();
    Ok(Json(draft))
}

/// PUT /api/drafts/{indicator} — merge the body's fields into the draft and
/// return the merged result.
pub async fn save(
    State(state): State<SharedState>,
    Owner(owner): Owner,
    Path(key): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let indicator = indicator_for(&key)?;
    let merged = state.drafts.save(&owner, indicator, fields).await;
    Ok(Json(merged))
}
