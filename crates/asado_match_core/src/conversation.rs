//! crates/asado_match_core/src/conversation.rs
//!
//! The conversation view for exactly one active match.

use crate::domain::{ChatMessage, Match, Sender};
use crate::error::{ActionError, ActionResult};
use crate::generation::{GenerationRequest, PendingRequest, Ticket};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The counterpart's canned answer to every message.
pub const SCRIPTED_REPLY: &str = "¡Dale! Nosotros ponemos las achuras. ¿Qué día les queda bien?";

pub fn match_announcement(group_name: &str) -> String {
    format!("¡Hicieron match con {}!", group_name)
}

#[derive(Debug)]
pub struct Conversation {
    match_id: Uuid,
    my_group: String,
    their_group: String,
    messages: Vec<ChatMessage>,
    pub draft: String,
    icebreaker: PendingRequest,
}

impl Conversation {
    /// Opens the conversation, seeded with the "you matched" system message.
    pub fn open(matched: &Match, my_group: &str) -> Self {
        let mut conversation = Self {
            match_id: matched.id,
            my_group: my_group.to_string(),
            their_group: matched.group.name.clone(),
            messages: Vec::new(),
            draft: String::new(),
            icebreaker: PendingRequest::default(),
        };
        conversation.push(Sender::System, match_announcement(&matched.group.name));
        conversation
    }

    pub fn match_id(&self) -> Uuid {
        self.match_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn is_generating_icebreaker(&self) -> bool {
        self.icebreaker.is_pending()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    // Timestamps never go backwards, even if the wall clock does.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.messages.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        }
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let message = ChatMessage {
            id: Uuid::new_v4(),
            sender,
            text,
            timestamp: self.next_timestamp(),
        };
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Appends a self-authored message and clears the draft.
    ///
    /// Empty or whitespace-only text leaves the conversation untouched.
    pub fn send(&mut self, text: &str) -> ActionResult<&ChatMessage> {
        if text.trim().is_empty() {
            return Err(ActionError::EmptyMessage);
        }
        self.draft.clear();
        Ok(self.push(Sender::Me, text.to_string()))
    }

    pub fn push_scripted_reply(&mut self) -> &ChatMessage {
        self.push(Sender::Them, SCRIPTED_REPLY.to_string())
    }

    pub fn begin_icebreaker(&mut self) -> ActionResult<(Ticket, GenerationRequest)> {
        let ticket = self.icebreaker.begin()?;
        let request = GenerationRequest::Icebreaker {
            my_group: self.my_group.clone(),
            their_group: self.their_group.clone(),
        };
        Ok((ticket, request))
    }

    /// Replaces the unsent draft with the icebreaker. Nothing is sent.
    pub fn apply_icebreaker(&mut self, ticket: Ticket, text: String) -> bool {
        if !self.icebreaker.complete(ticket) {
            return false;
        }
        self.draft = text;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn conversation() -> Conversation {
        let matched = Match {
            id: Uuid::new_v4(),
            group: seed::candidate_groups().remove(1),
            last_message: None,
        };
        Conversation::open(&matched, "Los del Fondo")
    }

    #[test]
    fn opens_with_exactly_one_system_message_naming_the_match() {
        let convo = conversation();
        assert_eq!(convo.messages().len(), 1);
        let first = &convo.messages()[0];
        assert!(first.is_system());
        assert!(first.text.contains("Los Parrilleros del Sur"));
    }

    #[test]
    fn blank_messages_are_no_ops() {
        let mut convo = conversation();
        for text in ["", "   ", "\n\t"] {
            assert_eq!(convo.send(text).unwrap_err(), ActionError::EmptyMessage);
        }
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn send_appends_and_clears_draft() {
        let mut convo = conversation();
        convo.set_draft("Dale!");
        let sent = convo.send("Dale!").unwrap();
        assert_eq!(sent.sender, Sender::Me);
        assert_eq!(sent.text, "Dale!");
        assert!(convo.draft.is_empty());
        assert!(!convo.can_send());

        let reply = convo.push_scripted_reply();
        assert_eq!(reply.sender, Sender::Them);
        assert_eq!(reply.text, SCRIPTED_REPLY);
        assert_eq!(convo.messages().len(), 3);
    }

    #[test]
    fn timestamps_are_monotonic() {
        let mut convo = conversation();
        convo.send("uno").unwrap();
        convo.push_scripted_reply();
        convo.send("dos").unwrap();
        let stamps: Vec<_> = convo.messages().iter().map(|m| m.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn icebreaker_replaces_draft_without_sending() {
        let mut convo = conversation();
        convo.set_draft("hola");
        let (ticket, request) = convo.begin_icebreaker().unwrap();
        assert_eq!(
            request,
            GenerationRequest::Icebreaker {
                my_group: "Los del Fondo".to_string(),
                their_group: "Los Parrilleros del Sur".to_string(),
            }
        );
        assert!(convo.is_generating_icebreaker());
        assert!(convo.apply_icebreaker(ticket, "¿Salen esos choripanes?".to_string()));
        assert_eq!(convo.draft, "¿Salen esos choripanes?");
        assert_eq!(convo.messages().len(), 1);
    }
}
