//! services/api/src/lib.rs
//!
//! The `api` service: WebSocket sessions for the swipe app plus a small REST surface.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;

use crate::{
    config::ConfigError,
    error::ApiError,
    web::{
        checklist_handler, generate_handler, health_handler, list_candidates_handler,
        rest::ApiDoc, state::AppState, ws_handler,
    },
};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the complete application router, Swagger UI included.
pub fn build_router(app_state: Arc<AppState>) -> Result<Router, ApiError> {
    let origin = app_state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidValue("ALLOWED_ORIGIN".to_string(), e.to_string()))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let api_router = Router::new()
        .route("/health", get(health_handler))
        .route("/candidates", get(list_candidates_handler))
        .route("/checklist", get(checklist_handler))
        .route("/generate", post(generate_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    Ok(Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())))
}
