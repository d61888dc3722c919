//! REST endpoints exercised through the full router, without a socket.

use api_lib::{
    adapters::OfflineTextAdapter,
    build_router,
    config::{Config, Timings},
    web::{rest::GenerateResponse, state::AppState},
};
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = Config {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        log_level: tracing::Level::INFO,
        allowed_origin: "http://localhost:5173".to_string(),
        llm_api_key: None,
        llm_api_base: "http://localhost:1".to_string(),
        llm_model: "test-model".to_string(),
        timings: Timings::default(),
    };
    let state = AppState::new(Arc::new(config), Arc::new(OfflineTextAdapter));
    build_router(Arc::new(state)).unwrap()
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_generate(payload: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::post("/generate")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn candidates_come_in_deck_order() {
    let (status, body) = get_json("/candidates").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Las Reinas de la Noche", "Los Parrilleros del Sur", "Tranqui 120"]
    );
    assert_eq!(body[0]["image_url"], "https://picsum.photos/400/600?random=1");
}

#[tokio::test]
async fn checklist_starts_unchecked() {
    let (status, body) = get_json("/checklist").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 9);
    assert_eq!(body["checked_count"], 0);
    assert_eq!(body["progress"], 0);
    assert_eq!(body["categories"], json!(["fire", "meat", "other", "drink"]));
}

#[tokio::test]
async fn offline_generate_returns_fallback() {
    let (status, bytes) = post_generate(json!({
        "kind": "icebreaker",
        "my_group": "Los Pibes",
        "their_group": "Tranqui 120"
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    let response: GenerateResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(response.text, "¿Salen esos choripanes?");
}

#[tokio::test]
async fn motto_without_vibe_is_accepted() {
    let (status, bytes) = post_generate(json!({ "kind": "motto", "group_name": "Los Pibes" })).await;
    assert_eq!(status, StatusCode::OK);
    let response: GenerateResponse = serde_json::from_slice(&bytes).unwrap();
    assert!(!response.text.is_empty());
}

#[tokio::test]
async fn blank_advice_query_is_a_bad_request() {
    let (status, _) = post_generate(json!({ "kind": "advice", "query": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn icebreaker_needs_both_group_names() {
    let (status, bytes) = post_generate(json!({
        "kind": "icebreaker",
        "my_group": " ",
        "their_group": "Tranqui 120"
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8(bytes).unwrap().contains("my_group"));
}

#[tokio::test]
async fn openapi_document_lists_every_path() {
    let (status, body) = get_json("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    for path in ["/health", "/candidates", "/checklist", "/generate"] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }
}
