//! services/api/src/web/session.rs
//!
//! The per-connection session driver. Applies client messages to the session
//! state, schedules the delayed work they trigger, and pushes the resulting
//! state back through the session's outbox.

use crate::web::{
    generation_task::generation_process,
    protocol::{ClientMessage, ServerMessage},
    reply_task::reply_process,
    state::{AppState, SessionState},
    swipe_task::swipe_process,
    views::{ChatMessageView, SessionView},
};
use asado_match_core::{ActionError, ActionResult, ProfileDraft, Screen};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Messages queued for the client. Drained by the connection's writer task.
pub type Outbox = mpsc::UnboundedSender<ServerMessage>;

/// Everything a handler or scheduled task needs to act on one session.
#[derive(Clone)]
pub struct SessionContext {
    pub app_state: Arc<AppState>,
    pub session: Arc<Mutex<SessionState>>,
    pub outbox: Outbox,
}

impl SessionContext {
    pub fn new(app_state: Arc<AppState>, outbox: Outbox) -> Self {
        Self::with_state(app_state, SessionState::default(), outbox)
    }

    pub fn with_state(app_state: Arc<AppState>, state: SessionState, outbox: Outbox) -> Self {
        Self {
            app_state,
            session: Arc::new(Mutex::new(state)),
            outbox,
        }
    }

    pub fn emit(&self, message: ServerMessage) {
        if self.outbox.send(message).is_err() {
            warn!("Session outbox is closed; dropping server message.");
        }
    }

    pub async fn emit_snapshot(&self) {
        let view = {
            let session = self.session.lock().await;
            SessionView::from(&*session)
        };
        self.emit(ServerMessage::Snapshot {
            session: Box::new(view),
        });
    }

    /// Cancels every task this session has scheduled.
    pub async fn shutdown(&self) {
        let mut session = self.session.lock().await;
        session.close_conversation();
        session.cancellation_token.cancel();
    }
}

/// Sleeps for `delay` unless `token` is cancelled first. Returns `true` if the delay elapsed.
pub(crate) async fn sleep_or_cancel(token: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

/// Applies one client message, reports a rejection if the action is disabled,
/// and always follows up with a fresh snapshot.
pub async fn handle_client_message(ctx: &SessionContext, message: ClientMessage) {
    if let Err(e) = apply(ctx, message).await {
        warn!("Rejected client action: {}", e);
        ctx.emit(ServerMessage::Rejected {
            reason: e.to_string(),
        });
    }
    ctx.emit_snapshot().await;
}

async fn apply(ctx: &SessionContext, message: ClientMessage) -> ActionResult<()> {
    let mut guard = ctx.session.lock().await;
    let state = &mut *guard;

    match message {
        ClientMessage::Snapshot => {}

        // --- Onboarding ---
        ClientMessage::SetGroupName { name } => {
            state.require_screen(Screen::Onboarding)?;
            state.draft.set_name(name);
        }
        ClientMessage::SetMemberCount { count } => {
            state.require_screen(Screen::Onboarding)?;
            state.draft.set_member_count(count)?;
        }
        ClientMessage::AdvanceOnboarding => {
            state.require_screen(Screen::Onboarding)?;
            state.draft.advance()?;
        }
        ClientMessage::BackOnboarding => {
            state.require_screen(Screen::Onboarding)?;
            state.draft.back();
        }
        ClientMessage::SetVibeDescription { text } => {
            state.require_screen(Screen::Onboarding)?;
            state.draft.set_vibe_description(text);
        }
        ClientMessage::SetMotto { motto } => {
            state.require_screen(Screen::Onboarding)?;
            state.draft.set_motto(motto);
        }
        ClientMessage::GenerateMotto => {
            state.require_screen(Screen::Onboarding)?;
            let (ticket, request) = state.draft.begin_motto()?;
            let token = state.cancellation_token.clone();
            tokio::spawn(generation_process(ctx.clone(), ticket, request, token));
        }
        ClientMessage::FinishOnboarding => {
            state.require_screen(Screen::Onboarding)?;
            let profile = state.draft.finish(&mut rand::rng())?;
            info!("Onboarding finished for group '{}'.", profile.name);
            state.app.complete_onboarding(profile);
        }

        // --- Navigation ---
        ClientMessage::Navigate { screen } => {
            state.app.navigate(screen.into())?;
            state.close_conversation();
        }
        ClientMessage::SignOut => {
            state.require_screen(Screen::Profile)?;
            state.close_conversation();
            state.app.sign_out();
            state.draft = ProfileDraft::default();
            info!("Session signed out; back to onboarding.");
        }

        // --- Candidate deck ---
        ClientMessage::Decide { direction } => {
            state.require_screen(Screen::Browse)?;
            let decision = state.deck.decide(direction.into())?;
            info!(
                "Decision {:?} on candidate '{}'.",
                decision.direction, decision.candidate.name
            );
            let token = state.cancellation_token.clone();
            tokio::spawn(swipe_process(ctx.clone(), decision, token));
        }

        // --- Matches and chat ---
        ClientMessage::OpenChat { match_id } => {
            state.require_screen(Screen::Matches)?;
            if !state.open_conversation(match_id) {
                info!("Match {} does not resolve; staying on the match list.", match_id);
            }
        }
        ClientMessage::ReturnToMatches => {
            state.app.return_to_matches()?;
            state.close_conversation();
        }
        ClientMessage::SetDraft { text } => {
            state.open_conversation_mut()?.conversation.set_draft(text);
        }
        ClientMessage::SendMessage { text } => {
            let open = state.conversation.as_mut().ok_or(ActionError::NoConversation)?;
            let message = ChatMessageView::from(open.conversation.send(&text)?);
            let match_id = open.conversation.match_id();
            let token = open.cancellation_token.clone();
            state.app.set_last_message(match_id, &message.text);

            ctx.emit(ServerMessage::MessageAppended { match_id, message });
            tokio::spawn(reply_process(ctx.clone(), match_id, token));
        }
        ClientMessage::RequestIcebreaker => {
            let open = state.open_conversation_mut()?;
            let (ticket, request) = open.conversation.begin_icebreaker()?;
            let token = open.cancellation_token.clone();
            tokio::spawn(generation_process(ctx.clone(), ticket, request, token));
        }

        // --- Checklist and advice ---
        ClientMessage::ToggleItem { item_id } => {
            state.require_screen(Screen::Checklist)?;
            state
                .checklist
                .toggle(item_id)
                .ok_or(ActionError::UnknownItem(item_id))?;
        }
        ClientMessage::ToggleAdvice => {
            state.require_screen(Screen::Checklist)?;
            state.advice.toggle_open();
        }
        ClientMessage::SetAdviceQuery { query } => {
            state.require_screen(Screen::Checklist)?;
            state.advice.set_query(query)?;
        }
        ClientMessage::AskAdvice => {
            state.require_screen(Screen::Checklist)?;
            let (ticket, request) = state.advice.begin_ask()?;
            let token = state.cancellation_token.clone();
            tokio::spawn(generation_process(ctx.clone(), ticket, request, token));
        }
        ClientMessage::NewAdviceQuery => {
            state.advice.new_query();
        }
    }

    Ok(())
}
