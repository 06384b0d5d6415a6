//! Indicator catalog endpoint.

use axum::Json;
use prospera_core::benchmarks::{formula, Formula};
use prospera_core::Indicator;
use serde::Serialize;

/// One catalog row: enough for a client to render an input form and audit
/// the benchmark the score came from.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub dimension: &'static str,
    pub sub_dimension: &'static str,
    pub inputs: &'static [&'static str],
    #[serde(flatten)]
    pub formula: Formula,
}

/// GET /api/indicators — the full benchmark catalog. Public: there is
/// nothing owner-specific in it.
pub async fn catalog() -> Json<Vec<CatalogEntry>> {
    let entries = Indicator::ALL
        .iter()
        .map(|&indicator| CatalogEntry {
            key: indicator.key(),
            dimension: indicator.sub_dimension().dimension().key(),
            sub_dimension: indicator.sub_dimension().key(),
            inputs: indicator.inputs(),
            formula: formula(indicator),
        })
        .collect();
    Json(entries)
}
