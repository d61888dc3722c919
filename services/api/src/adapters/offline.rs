//! services/api/src/adapters/offline.rs
//!
//! Stand-in for the LLM when no API key is configured. Every call fails, so
//! the core's `TextGenerator` answers with its fallback strings.

use asado_match_core::ports::{PortError, PortResult, TextGenerationService};
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTextAdapter;

#[async_trait]
impl TextGenerationService for OfflineTextAdapter {
    async fn complete(&self, _prompt: &str) -> PortResult<String> {
        Err(PortError::Unavailable(
            "no LLM API key configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asado_match_core::{GenerationRequest, TextGenerator};
    use std::sync::Arc;

    #[tokio::test]
    async fn offline_generation_resolves_to_fallback() {
        let generator = TextGenerator::new(Arc::new(OfflineTextAdapter));
        let request = GenerationRequest::Advice {
            query: "¿Sal gruesa o fina?".to_string(),
        };
        let text = generator.generate(&request).await;
        assert!(request.kind().fallbacks().contains(&text.as_str()));
    }
}
