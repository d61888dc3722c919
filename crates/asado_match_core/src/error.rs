//! crates/asado_match_core/src/error.rs
//!
//! Disabled-action states. An operation whose precondition does not hold
//! returns one of these instead of changing state.

use crate::domain::Screen;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("A group name is required")]
    NameRequired,
    #[error("Member count {0} is outside the allowed range 2..=10")]
    MemberCountOutOfRange(u8),
    #[error("Either a vibe description or a motto is required")]
    MottoOrVibeRequired,
    #[error("Onboarding is not at the {0} step")]
    WrongStep(&'static str),
    #[error("A request from this control is already in flight")]
    RequestInFlight,
    #[error("Message text is empty")]
    EmptyMessage,
    #[error("Advice query is empty")]
    EmptyQuery,
    #[error("An answer is displayed; start a new query first")]
    AnswerShown,
    #[error("There are no candidates to decide on")]
    NoCandidates,
    #[error("The previous decision has not settled yet")]
    DecisionPending,
    #[error("Onboarding has not been completed")]
    ProfileRequired,
    #[error("Screen {0:?} cannot be reached from the tab bar")]
    UnreachableScreen(Screen),
    #[error("No conversation is open")]
    NoConversation,
    #[error("This action is only available on the {0:?} screen")]
    NotOnScreen(Screen),
    #[error("Checklist item {0} does not exist")]
    UnknownItem(u32),
}

pub type ActionResult<T> = Result<T, ActionError>;
