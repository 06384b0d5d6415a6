//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{calculations, drafts, indicators, system};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health", get(system::health))
        .route("/api/indicators", get(indicators::catalog))
        .route(
            "/api/calculations",
            get(calculations::list)
                .post(calculations::upsert)
                .delete(calculations::delete),
        )
        .route(
            "/api/calculations/{key}",
            get(calculations::detail).post(calculations::submit),
        )
        .route(
            "/api/drafts/{indicator}",
            get(drafts::load).put(drafts::save),
        )
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenTable;
    use crate::drafts::MemoryDraftStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use prospera_common::config::AuthConfig;
    use prospera_db::MemoryRecordStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let mut auth = AuthConfig::default();
        auth.tokens
            .insert("alice-token".to_string(), "alice".to_string());
        auth.tokens.insert("bob-token".to_string(), "bob".to_string());

        build_router(AppState::new(
            Arc::new(MemoryRecordStore::new()),
            Arc::new(TokenTable::from_config(&auth)),
            Arc::new(MemoryDraftStore::new()),
        ))
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn submit_body(city: &str, inputs: Value) -> Value {
        json!({ "city": city, "country": "Kenya", "inputs": inputs })
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let response = test_app()
            .oneshot(request("GET", "/health", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let response = test_app()
            .oneshot(request("GET", "/api/calculations", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthorized() {
        let response = test_app()
            .oneshot(request("GET", "/api/calculations", Some("nope"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_indicator_catalog_lists_benchmarks() {
        let response = test_app()
            .oneshot(request("GET", "/api/indicators", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 47);

        let literacy = entries
            .iter()
            .find(|e| e["key"] == "literacy_rate")
            .unwrap();
        assert_eq!(literacy["dimension"], "quality_of_life");
        assert_eq!(literacy["shape"], "linear");
        assert_eq!(literacy["min"], 15.0);
        assert_eq!(literacy["max"], 99.9);
    }

    #[tokio::test]
    async fn test_submit_scores_and_persists() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/calculations/literacy_rate",
                Some("alice-token"),
                Some(submit_body(
                    "Nairobi",
                    json!({ "literate_population": 80_000.0, "total_population": 100_000.0 }),
                )),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["scored"]["actual"], json!(80.0));
        assert_eq!(body["scored"]["standardized"], json!(76.56));
        assert_eq!(body["scored"]["comment"], json!("SOLID"));
        // The merged record carries the legacy flat spelling and rollups.
        assert_eq!(body["record"]["literacy_rate_standardized"], json!(76.56));
        assert_eq!(body["record"]["cpi"], json!(76.56));

        let listed = json_body(
            app.oneshot(request("GET", "/api/calculations", Some("alice-token"), None))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["city"], json!("Nairobi"));
    }

    #[tokio::test]
    async fn test_submit_unknown_indicator_is_404() {
        let response = test_app()
            .oneshot(request(
                "POST",
                "/api/calculations/happiness_index",
                Some("alice-token"),
                Some(submit_body("Nairobi", json!({ "value": 1.0 }))),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_invalid_inputs_is_400_with_detail() {
        let response = test_app()
            .oneshot(request(
                "POST",
                "/api/calculations/literacy_rate",
                Some("alice-token"),
                Some(submit_body(
                    "Nairobi",
                    json!({ "literate_population": 120_000.0, "total_population": 100_000.0 }),
                )),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["validation"]["kind"], json!("part_exceeds_whole"));
    }

    #[tokio::test]
    async fn test_submit_without_city_is_400() {
        let response = test_app()
            .oneshot(request(
                "POST",
                "/api/calculations/literacy_rate",
                Some("alice-token"),
                Some(json!({
                    "country": "Kenya",
                    "inputs": { "literate_population": 1.0, "total_population": 2.0 }
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_flat_upsert_merges_and_rolls_up() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/calculations",
                Some("alice-token"),
                Some(json!({
                    "city": "Nairobi",
                    "country": "Kenya",
                    "city_name": "Nairobi City",
                    "fields": {
                        "literacy_rate": 80.0,
                        "literacy_rate_standardized": 76.56,
                        "literacy_rate_comment": "SOLID"
                    }
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["city_name"], json!("Nairobi City"));
        assert_eq!(body["education"], json!(76.56));
        assert_eq!(body["quality_of_life"], json!(76.56));
        assert_eq!(body["cpi_comment"], json!("SOLID"));

        // Second upsert for the same key merges instead of replacing.
        let merged = json_body(
            app.oneshot(request(
                "POST",
                "/api/calculations",
                Some("alice-token"),
                Some(json!({
                    "city": "Nairobi",
                    "country": "Kenya",
                    "fields": { "poverty_rate_standardized_score": 84.05 }
                })),
            ))
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(merged["literacy_rate_standardized"], json!(76.56));
        assert_eq!(merged["poverty_rate_standardized_score"], json!(84.05));
    }

    #[tokio::test]
    async fn test_flat_upsert_rejects_out_of_range_scores() {
        let app = test_app();

        let over = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/calculations",
                Some("alice-token"),
                Some(json!({
                    "city": "Nairobi",
                    "country": "Kenya",
                    "fields": { "literacy_rate_standardized": 250.0 }
                })),
            ))
            .await
            .unwrap();
        assert_eq!(over.status(), StatusCode::BAD_REQUEST);
        let body = json_body(over).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("literacy_rate_standardized"));

        let negative = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/calculations",
                Some("alice-token"),
                Some(json!({
                    "city": "Nairobi",
                    "country": "Kenya",
                    "fields": { "poverty_rate_standardized_score": -1.0 }
                })),
            ))
            .await
            .unwrap();
        assert_eq!(negative.status(), StatusCode::BAD_REQUEST);

        // Nothing was persisted, so nothing can reach the rollups.
        let listed = json_body(
            app.oneshot(request("GET", "/api/calculations", Some("alice-token"), None))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_flat_upsert_without_known_fields_is_400() {
        let response = test_app()
            .oneshot(request(
                "POST",
                "/api/calculations",
                Some("alice-token"),
                Some(json!({
                    "city": "Nairobi",
                    "country": "Kenya",
                    "fields": { "somebody_elses_column": 1.0 }
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_detail_is_owner_scoped() {
        let app = test_app();

        let created = json_body(
            app.clone()
                .oneshot(request(
                    "POST",
                    "/api/calculations/literacy_rate",
                    Some("alice-token"),
                    Some(submit_body(
                        "Nairobi",
                        json!({ "literate_population": 80.0, "total_population": 100.0 }),
                    )),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["record"]["id"].as_str().unwrap().to_string();

        let mine = app
            .clone()
            .oneshot(request(
                "GET",
                &format!("/api/calculations/{id}"),
                Some("alice-token"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(mine.status(), StatusCode::OK);

        // Same id, different owner: indistinguishable from missing.
        let theirs = app
            .clone()
            .oneshot(request(
                "GET",
                &format!("/api/calculations/{id}"),
                Some("bob-token"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(theirs.status(), StatusCode::NOT_FOUND);

        let malformed = app
            .oneshot(request(
                "GET",
                "/api/calculations/not-a-uuid",
                Some("alice-token"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(malformed.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_requires_id_and_is_scoped() {
        let app = test_app();

        let missing_id = app
            .clone()
            .oneshot(request("DELETE", "/api/calculations", Some("alice-token"), None))
            .await
            .unwrap();
        assert_eq!(missing_id.status(), StatusCode::BAD_REQUEST);

        let created = json_body(
            app.clone()
                .oneshot(request(
                    "POST",
                    "/api/calculations/literacy_rate",
                    Some("alice-token"),
                    Some(submit_body(
                        "Nairobi",
                        json!({ "literate_population": 80.0, "total_population": 100.0 }),
                    )),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["record"]["id"].as_str().unwrap().to_string();

        let theirs = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/calculations?id={id}"),
                Some("bob-token"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(theirs.status(), StatusCode::NOT_FOUND);

        let mine = json_body(
            app.clone()
                .oneshot(request(
                    "DELETE",
                    &format!("/api/calculations?id={id}"),
                    Some("alice-token"),
                    None,
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(mine["deleted"], json!(true));

        let again = app
            .oneshot(request(
                "DELETE",
                &format!("/api/calculations?id={id}"),
                Some("alice-token"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_draft_round_trip() {
        let app = test_app();

        let empty = json_body(
            app.clone()
                .oneshot(request(
                    "GET",
                    "/api/drafts/literacy_rate",
                    Some("alice-token"),
                    None,
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(empty, json!({}));

        let saved = json_body(
            app.clone()
                .oneshot(request(
                    "PUT",
                    "/api/drafts/literacy_rate",
                    Some("alice-token"),
                    Some(json!({ "literate_population": 80_000 })),
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(saved["literate_population"], json!(80_000));

        let loaded = json_body(
            app.oneshot(request(
                "GET",
                "/api/drafts/literacy_rate",
                Some("alice-token"),
                None,
            ))
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(loaded["literate_population"], json!(80_000));
    }

    #[tokio::test]
    async fn test_draft_unknown_indicator_is_404() {
        let response = test_app()
            .oneshot(request(
                "GET",
                "/api/drafts/happiness_index",
                Some("alice-token"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
