//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::{
    state::AppState,
    views::{ChecklistView, GroupProfileView},
};
use asado_match_core::{seed, Checklist, GenerationKind, GenerationRequest};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        list_candidates_handler,
        checklist_handler,
        generate_handler,
    ),
    components(
        schemas(GroupProfileView, ChecklistView, GenerateRequest, GenerateResponse, GenerationKindView)
    ),
    tags(
        (name = "Asado Match API", description = "Candidate groups, the asado checklist and the text generator behind the swipe app.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKindView {
    Motto,
    Icebreaker,
    Advice,
}

impl From<GenerationKind> for GenerationKindView {
    fn from(kind: GenerationKind) -> Self {
        match kind {
            GenerationKind::Motto => GenerationKindView::Motto,
            GenerationKind::Icebreaker => GenerationKindView::Icebreaker,
            GenerationKind::Advice => GenerationKindView::Advice,
        }
    }
}

/// One text-generation call. The `kind` field selects the variant.
#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerateRequest {
    Motto {
        group_name: String,
        #[serde(default)]
        vibe: String,
    },
    Icebreaker {
        my_group: String,
        their_group: String,
    },
    Advice {
        query: String,
    },
}

impl GenerateRequest {
    /// Checks the required fields and converts into the core request.
    fn into_core(self) -> Result<GenerationRequest, String> {
        let require = |field: &str, value: &str| {
            if value.trim().is_empty() {
                Err(format!("'{}' must not be blank", field))
            } else {
                Ok(())
            }
        };
        match self {
            GenerateRequest::Motto { group_name, vibe } => {
                require("group_name", &group_name)?;
                Ok(GenerationRequest::Motto { group_name, vibe })
            }
            GenerateRequest::Icebreaker { my_group, their_group } => {
                require("my_group", &my_group)?;
                require("their_group", &their_group)?;
                Ok(GenerationRequest::Icebreaker { my_group, their_group })
            }
            GenerateRequest::Advice { query } => {
                require("query", &query)?;
                Ok(GenerationRequest::Advice { query })
            }
        }
    }
}

/// The generated text. Falls back to a fixed line when the LLM is unavailable.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GenerateResponse {
    pub kind: GenerationKindView,
    pub text: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "The server is up", body = String))
)]
pub async fn health_handler() -> &'static str {
    "OK"
}

/// List the candidate groups every new session starts its deck with.
#[utoipa::path(
    get,
    path = "/candidates",
    responses(
        (status = 200, description = "The seeded candidate groups, in deck order", body = Vec<GroupProfileView>)
    )
)]
pub async fn list_candidates_handler() -> Json<Vec<GroupProfileView>> {
    let candidates = seed::candidate_groups();
    Json(candidates.iter().map(GroupProfileView::from).collect())
}

/// The starting asado checklist, nothing checked yet.
#[utoipa::path(
    get,
    path = "/checklist",
    responses((status = 200, description = "The seeded checklist", body = ChecklistView))
)]
pub async fn checklist_handler() -> Json<ChecklistView> {
    Json(ChecklistView::from(&Checklist::seeded()))
}

/// Generate a motto, an icebreaker or a piece of grill advice.
///
/// Never fails because of the LLM: an unreachable or silent model yields a fallback line.
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Text generated (possibly a fallback)", body = GenerateResponse),
        (status = 400, description = "A required field was blank")
    )
)]
pub async fn generate_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = payload
        .into_core()
        .map_err(|reason| (StatusCode::BAD_REQUEST, reason))?;
    let kind = request.kind();
    info!("REST generation request for {:?}.", kind);

    let text = app_state.text_generator.generate(&request).await;
    Ok(Json(GenerateResponse {
        kind: kind.into(),
        text,
    }))
}
