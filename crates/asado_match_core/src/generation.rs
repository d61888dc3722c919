//! crates/asado_match_core/src/generation.rs
//!
//! The text-generation boundary used by the onboarding, chat and checklist
//! views. `TextGenerator::generate` always yields displayable text: any
//! failure of the underlying port is masked by a fixed fallback string.

use crate::error::{ActionError, ActionResult};
use crate::ports::TextGenerationService;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const MOTTO_FALLBACKS: [&str; 4] = [
    "Donde hay humo, hay asado.",
    "Parrilla, amigos y nada más.",
    "Un aplauso para el asador.",
    "La vida es mejor con brasas.",
];
const ICEBREAKER_FALLBACKS: [&str; 1] = ["¿Salen esos choripanes?"];
const ADVICE_FALLBACKS: [&str; 1] =
    ["Che, poné la carne cuando la brasa tenga una capa de ceniza blanca. No falla."];

/// Used in the motto prompt when the group left its vibe blank.
pub const DEFAULT_VIBE: &str = "amigos de fiesta y playa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Motto,
    Icebreaker,
    Advice,
}

impl GenerationKind {
    /// The fixed set of strings returned when the live call fails.
    pub fn fallbacks(self) -> &'static [&'static str] {
        match self {
            GenerationKind::Motto => &MOTTO_FALLBACKS,
            GenerationKind::Icebreaker => &ICEBREAKER_FALLBACKS,
            GenerationKind::Advice => &ADVICE_FALLBACKS,
        }
    }

    fn strips_quotes(self) -> bool {
        matches!(self, GenerationKind::Motto | GenerationKind::Icebreaker)
    }
}

/// A text-generation call together with its kind-specific inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Motto { group_name: String, vibe: String },
    Icebreaker { my_group: String, their_group: String },
    Advice { query: String },
}

impl GenerationRequest {
    pub fn kind(&self) -> GenerationKind {
        match self {
            GenerationRequest::Motto { .. } => GenerationKind::Motto,
            GenerationRequest::Icebreaker { .. } => GenerationKind::Icebreaker,
            GenerationRequest::Advice { .. } => GenerationKind::Advice,
        }
    }

    /// Assembles the natural-language prompt sent to the hosted model.
    pub fn prompt(&self) -> String {
        match self {
            GenerationRequest::Motto { group_name, vibe } => {
                let vibe = match vibe.trim() {
                    "" => DEFAULT_VIBE,
                    v => v,
                };
                format!(
                    "Sos un experto en la cultura joven del Río de la Plata.\n\
                     Escribí un lema corto, divertido y pegadizo para un grupo de amigos \
                     que sale de asado en la costa, llamado \"{group_name}\".\n\
                     El ambiente del grupo es: {vibe}.\n\
                     Usá español rioplatense y no más de 12 palabras.\n\
                     Devolvé solamente el lema."
                )
            }
            GenerationRequest::Icebreaker {
                my_group,
                their_group,
            } => format!(
                "Escribí una frase rompehielo divertida para arrancar el chat en una app \
                 de citas grupales para asados.\n\
                 El grupo \"{my_group}\" le escribe al grupo \"{their_group}\".\n\
                 Tiene que ser casual, veraniega y hablar de comida o bebida.\n\
                 Devolvé solamente la frase."
            ),
            GenerationRequest::Advice { query } => format!(
                "Sos \"El Asador Virtual\", un gaucho experto en parrilla.\n\
                 Respondé brevemente esta duda sobre el asado: \"{query}\".\n\
                 Usá un tono rústico pero amable, en dos oraciones como máximo."
            ),
        }
    }
}

/// Removes embedded quotation marks (for mottos and icebreakers) and trims.
pub fn sanitize(kind: GenerationKind, raw: &str) -> String {
    if kind.strips_quotes() {
        raw.chars()
            .filter(|c| !matches!(c, '"' | '“' | '”'))
            .collect::<String>()
            .trim()
            .to_string()
    } else {
        raw.trim().to_string()
    }
}

fn pick_fallback(kind: GenerationKind) -> String {
    let options = kind.fallbacks();
    options
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(options[0])
        .to_string()
}

//=========================================================================================
// TextGenerator
//=========================================================================================

/// Wraps a `TextGenerationService` and recovers every failure locally.
#[derive(Clone)]
pub struct TextGenerator {
    backend: Arc<dyn TextGenerationService>,
}

impl TextGenerator {
    pub fn new(backend: Arc<dyn TextGenerationService>) -> Self {
        Self { backend }
    }

    /// Produces display text for `request`. Never fails and never returns an empty string.
    pub async fn generate(&self, request: &GenerationRequest) -> String {
        let kind = request.kind();
        match self.backend.complete(&request.prompt()).await {
            Ok(raw) => {
                let text = sanitize(kind, &raw);
                if text.is_empty() {
                    warn!("Text generation for {:?} returned no usable text, using fallback.", kind);
                    pick_fallback(kind)
                } else {
                    info!("Generated {:?} text ({} chars).", kind, text.chars().count());
                    text
                }
            }
            Err(e) => {
                warn!("Text generation for {:?} failed: {}. Using fallback.", kind, e);
                pick_fallback(kind)
            }
        }
    }
}

//=========================================================================================
// In-flight tracking
//=========================================================================================

/// Identifies one outstanding text-generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(Uuid);

/// The single in-flight flag owned by a control that triggers text generation.
#[derive(Debug, Default)]
pub struct PendingRequest {
    outstanding: Option<Ticket>,
}

impl PendingRequest {
    pub fn is_pending(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Marks a request as outstanding, refusing overlapping requests.
    pub fn begin(&mut self) -> ActionResult<Ticket> {
        if self.outstanding.is_some() {
            return Err(ActionError::RequestInFlight);
        }
        let ticket = Ticket(Uuid::new_v4());
        self.outstanding = Some(ticket);
        Ok(ticket)
    }

    /// Clears the flag if `ticket` is the outstanding one.
    ///
    /// Returns `false` for stale tickets, whose results must be discarded.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.outstanding == Some(ticket) {
            self.outstanding = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{PortError, PortResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays one canned outcome and records the prompts it was given.
    struct ScriptedBackend {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerationService for ScriptedBackend {
        async fn complete(&self, prompt: &str) -> PortResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .clone()
                .ok_or_else(|| PortError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn motto_request() -> GenerationRequest {
        GenerationRequest::Motto {
            group_name: "Los del Fondo".to_string(),
            vibe: String::new(),
        }
    }

    #[tokio::test]
    async fn failing_backend_yields_fallback_for_every_kind() {
        let generator = TextGenerator::new(ScriptedBackend::failing());
        let requests = [
            motto_request(),
            GenerationRequest::Icebreaker {
                my_group: "A".to_string(),
                their_group: "B".to_string(),
            },
            GenerationRequest::Advice {
                query: "¿Cuánta leña?".to_string(),
            },
        ];
        for request in requests {
            let text = generator.generate(&request).await;
            assert!(!text.is_empty());
            assert!(request.kind().fallbacks().contains(&text.as_str()));
        }
    }

    #[tokio::test]
    async fn blank_reply_is_treated_as_failure() {
        let generator = TextGenerator::new(ScriptedBackend::replying("  \"\"  "));
        let text = generator.generate(&motto_request()).await;
        assert!(MOTTO_FALLBACKS.contains(&text.as_str()));
    }

    #[tokio::test]
    async fn motto_quotes_are_stripped_and_trimmed() {
        let generator = TextGenerator::new(ScriptedBackend::replying("\n \"Brasas y playa\" \n"));
        assert_eq!(generator.generate(&motto_request()).await, "Brasas y playa");
    }

    #[tokio::test]
    async fn advice_keeps_inner_quotes() {
        let generator = TextGenerator::new(ScriptedBackend::replying(" Usá \"quebracho\". "));
        let request = GenerationRequest::Advice {
            query: "¿Qué leña?".to_string(),
        };
        assert_eq!(generator.generate(&request).await, "Usá \"quebracho\".");
    }

    #[tokio::test]
    async fn blank_vibe_uses_default_in_prompt() {
        let backend = ScriptedBackend::replying("ok");
        let generator = TextGenerator::new(backend.clone());
        generator.generate(&motto_request()).await;
        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains(DEFAULT_VIBE));
        assert!(prompts[0].contains("Los del Fondo"));
    }

    #[test]
    fn pending_request_refuses_overlap_and_clears_once() {
        let mut pending = PendingRequest::default();
        let ticket = pending.begin().unwrap();
        assert_eq!(pending.begin(), Err(ActionError::RequestInFlight));
        assert!(pending.complete(ticket));
        assert!(!pending.complete(ticket));
        assert!(!pending.is_pending());
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_request() {
        let mut pending = PendingRequest::default();
        let old = pending.begin().unwrap();
        pending.complete(old);
        let current = pending.begin().unwrap();
        assert!(!pending.complete(old));
        assert!(pending.is_pending());
        assert!(pending.complete(current));
    }
}
