//! services/api/src/web/state.rs
//!
//! Defines the application's shared and session-specific states.

use crate::config::Config;
use asado_match_core::{
    ports::TextGenerationService, ActionError, ActionResult, AdvicePanel, AppSession,
    CandidateDeck, Checklist, Conversation, ProfileDraft, Screen, TextGenerator,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Connections)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub text_generator: TextGenerator,
}

impl AppState {
    pub fn new(config: Arc<Config>, text_backend: Arc<dyn TextGenerationService>) -> Self {
        Self {
            config,
            text_generator: TextGenerator::new(text_backend),
        }
    }
}

//=========================================================================================
// SessionState (Specific to One WebSocket Connection)
//=========================================================================================

/// The conversation currently on screen, with the token that scopes its scheduled replies.
pub struct OpenConversation {
    pub conversation: Conversation,
    pub cancellation_token: CancellationToken,
}

/// Everything one browser session holds. Dropped when the connection closes.
pub struct SessionState {
    pub app: AppSession,
    pub draft: ProfileDraft,
    pub deck: CandidateDeck,
    pub conversation: Option<OpenConversation>,
    pub checklist: Checklist,
    pub advice: AdvicePanel,
    /// Cancels every task scheduled by this session.
    pub cancellation_token: CancellationToken,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(CandidateDeck::seeded(), Checklist::seeded())
    }
}

impl SessionState {
    pub fn new(deck: CandidateDeck, checklist: Checklist) -> Self {
        Self {
            app: AppSession::default(),
            draft: ProfileDraft::default(),
            deck,
            conversation: None,
            checklist,
            advice: AdvicePanel::default(),
            cancellation_token: CancellationToken::new(),
        }
    }

    /// Fails unless `screen` is the one currently rendered.
    pub fn require_screen(&self, screen: Screen) -> ActionResult<()> {
        if self.app.resolved_screen() == screen {
            Ok(())
        } else {
            Err(ActionError::NotOnScreen(screen))
        }
    }

    pub fn open_conversation_mut(&mut self) -> ActionResult<&mut OpenConversation> {
        self.conversation.as_mut().ok_or(ActionError::NoConversation)
    }

    /// Opens the chat for `match_id`, replacing any conversation already open.
    ///
    /// Returns `false` when the coordinator fell back to the match list.
    pub fn open_conversation(&mut self, match_id: Uuid) -> bool {
        self.close_conversation();
        let my_group = self
            .app
            .own_profile()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let conversation = match self.app.open_chat(match_id) {
            Some(matched) => Conversation::open(matched, &my_group),
            None => return false,
        };
        self.conversation = Some(OpenConversation {
            conversation,
            cancellation_token: self.cancellation_token.child_token(),
        });
        true
    }

    /// Tears down the open conversation and cancels its pending replies.
    pub fn close_conversation(&mut self) {
        if let Some(open) = self.conversation.take() {
            open.cancellation_token.cancel();
        }
    }
}
