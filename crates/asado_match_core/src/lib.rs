pub mod checklist;
pub mod conversation;
pub mod coordinator;
pub mod deck;
pub mod domain;
pub mod error;
pub mod generation;
pub mod onboarding;
pub mod ports;
pub mod seed;

pub use checklist::{AdvicePanel, Checklist};
pub use conversation::Conversation;
pub use coordinator::AppSession;
pub use deck::{CandidateDeck, PendingDecision};
pub use domain::{
    AsadoItem, ChatMessage, Direction, GroupProfile, ItemCategory, Match, Screen, Sender, VibeStats,
};
pub use error::{ActionError, ActionResult};
pub use generation::{GenerationKind, GenerationRequest, PendingRequest, TextGenerator, Ticket};
pub use onboarding::{OnboardingStep, ProfileDraft};
pub use ports::{PortError, PortResult, TextGenerationService};
