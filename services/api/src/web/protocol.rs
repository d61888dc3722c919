//! services/api/src/web/protocol.rs
//!
//! Defines the WebSocket message protocol between the browser client and the API server.
//! One connection is one session: every client message maps to a user action on one of
//! the app's views, and the server answers with a full snapshot after each change.

use crate::web::views::{ChatMessageView, DirectionView, MatchView, ScreenView, SessionView};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Messages Sent FROM the Client (Browser) TO the Server
//=========================================================================================

/// Represents the structured text messages a client can send to the server.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Asks for the current session state without changing it.
    Snapshot,

    // --- Onboarding ---
    SetGroupName { name: String },
    SetMemberCount { count: u8 },
    AdvanceOnboarding,
    BackOnboarding,
    SetVibeDescription { text: String },
    SetMotto { motto: String },
    /// Asks the LLM for a motto based on the name and vibe typed so far.
    GenerateMotto,
    FinishOnboarding,

    // --- Navigation ---
    Navigate { screen: ScreenView },
    SignOut,

    // --- Candidate deck ---
    Decide { direction: DirectionView },

    // --- Matches and chat ---
    OpenChat { match_id: Uuid },
    ReturnToMatches,
    SetDraft { text: String },
    SendMessage { text: String },
    /// Asks the LLM for an opening line. It replaces the draft; nothing is sent.
    RequestIcebreaker,

    // --- Checklist and advice ---
    ToggleItem { item_id: u32 },
    ToggleAdvice,
    SetAdviceQuery { query: String },
    AskAdvice,
    NewAdviceQuery,
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client (Browser)
//=========================================================================================

/// Represents the structured text messages the server can send to the client.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The full session state. Sent on connect and after every change.
    Snapshot { session: Box<SessionView> },

    /// An accepted candidate has become a match.
    MatchCreated { matched: MatchView },

    /// A message was added to the open conversation.
    MessageAppended { match_id: Uuid, message: ChatMessageView },

    /// The requested action is currently disabled. Nothing changed.
    Rejected { reason: String },
}
