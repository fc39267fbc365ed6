use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use steel_atlas::catalog::SteelCatalog;
use steel_atlas::recommend::RecommendationEngine;
use steel_atlas::{catalog_router, SteelAtlasService};
use tower::ServiceExt;

fn app() -> Router {
    let catalog = Arc::new(SteelCatalog::bundled().expect("bundled catalog parses"));
    let service = Arc::new(SteelAtlasService::new(catalog, RecommendationEngine::default()));
    catalog_router(service)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn lists_filtered_steels() {
    let (status, body) =
        send(get("/api/v1/steels?producer=crucible&min_toughness=7&sort=edge")).await;

    assert_eq!(status, StatusCode::OK);
    let steels = body["steels"].as_array().expect("steel list");
    assert_eq!(body["count"], steels.len());
    assert!(!steels.is_empty());
    assert!(steels.iter().all(|steel| {
        steel["producer"] == "Crucible" && steel["metrics"]["toughness"].as_f64() >= Some(7.0)
    }));
}

#[tokio::test]
async fn unknown_steel_is_not_found() {
    let (status, body) = send(get("/api/v1/steels/unobtainium")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "steel 'unobtainium' not found");
}

#[tokio::test]
async fn tempering_reading_interpolates_in_requested_unit() {
    let (status, body) =
        send(get("/api/v1/steels/aeb-l/tempering?temperature=392&unit=f")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["steel_id"], "aeb-l");
    assert_eq!(body["unit"], "fahrenheit");
    assert_eq!(body["display_hrc"], 60.0);
    assert_eq!(body["clamped"], false);
}

#[tokio::test]
async fn tempering_unit_is_case_insensitive() {
    let (status, body) =
        send(get("/api/v1/steels/aeb-l/tempering?temperature=200&unit=C")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unit"], "celsius");
    assert_eq!(body["display_hrc"], 60.0);
}

#[tokio::test]
async fn non_finite_tempering_temperature_is_rejected() {
    for raw in ["NaN", "inf"] {
        let uri = format!("/api/v1/steels/aeb-l/tempering?temperature={raw}");
        let (status, body) = send(get(&uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "temperature={raw}");
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("finite")));
    }
}

#[tokio::test]
async fn recommendations_fall_back_on_bad_answers() {
    let (status, body) = send(post_json(
        "/api/v1/recommendations",
        json!({ "useCase": "bogus", "priority": 7 }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answers"]["useCase"], "edc");
    assert_eq!(body["answers"]["priority"], "balanced");
    let results = body["results"].as_array().expect("results");
    assert_eq!(results.len(), 5);
    assert!(results
        .iter()
        .all(|result| result["match_score"].as_u64() <= Some(100)));
}

#[tokio::test]
async fn recommendation_limit_is_honoured() {
    let (status, body) = send(post_json(
        "/api/v1/recommendations",
        json!({ "useCase": "hard-use", "limit": 2 }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results");
    assert_eq!(results.len(), 2);
    assert!(results[0]["top_metrics"].as_array().is_some());
}

#[tokio::test]
async fn compare_reports_missing_and_rejects_too_few() {
    let (status, body) = send(post_json(
        "/api/v1/compare",
        json!({ "ids": ["m390", "cpm-3v", "mystery"] }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["steels"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["missing"], json!(["mystery"]));

    let (status, _) = send(post_json("/api/v1/compare", json!({ "ids": ["m390"] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn producers_are_listed_once() {
    let (status, body) = send(get("/api/v1/producers")).await;

    assert_eq!(status, StatusCode::OK);
    let producers = body["producers"].as_array().expect("producers");
    assert!(producers.contains(&json!("Crucible")));
    let crucible = producers
        .iter()
        .filter(|producer| *producer == "Crucible")
        .count();
    assert_eq!(crucible, 1);
}
