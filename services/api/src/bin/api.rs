//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{OfflineTextAdapter, OpenAiTextAdapter},
    build_router,
    config::Config,
    error::ApiError,
    web::state::AppState,
};
use asado_match_core::TextGenerationService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize the Text Generation Adapter ---
    let text_backend: Arc<dyn TextGenerationService> = match config.llm_api_key.as_deref() {
        Some(api_key) => {
            info!(
                "Using model '{}' at {} for text generation.",
                config.llm_model, config.llm_api_base
            );
            let client = OpenAiTextAdapter::client_for(&config.llm_api_base, api_key);
            Arc::new(OpenAiTextAdapter::new(client, config.llm_model.clone()))
        }
        None => {
            warn!("No LLM API key configured; every generation will use its fallback text.");
            Arc::new(OfflineTextAdapter)
        }
    };

    // --- 3. Build the Shared AppState and the Router ---
    let app_state = Arc::new(AppState::new(config.clone(), text_backend));
    let app = build_router(app_state)?;

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
