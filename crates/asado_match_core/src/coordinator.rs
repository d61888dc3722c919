//! crates/asado_match_core/src/coordinator.rs
//!
//! The top-level view coordinator. Owns the session-scoped state shared by
//! sibling views: the current screen, the user's own profile, the accumulated
//! matches and the match whose conversation is open.

use crate::domain::{GroupProfile, Match, Screen};
use crate::error::{ActionError, ActionResult};
use uuid::Uuid;

#[derive(Debug)]
pub struct AppSession {
    screen: Screen,
    own_profile: Option<GroupProfile>,
    matches: Vec<Match>,
    active_match_id: Option<Uuid>,
}

impl Default for AppSession {
    fn default() -> Self {
        Self {
            screen: Screen::Onboarding,
            own_profile: None,
            matches: Vec::new(),
            active_match_id: None,
        }
    }
}

impl AppSession {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn own_profile(&self) -> Option<&GroupProfile> {
        self.own_profile.as_ref()
    }

    /// Matches, newest first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn active_match_id(&self) -> Option<Uuid> {
        self.active_match_id
    }

    pub fn find_match(&self, match_id: Uuid) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// The match whose conversation is open, if it still resolves.
    pub fn active_match(&self) -> Option<&Match> {
        self.active_match_id.and_then(|id| self.find_match(id))
    }

    /// The screen to render. A chat that no longer resolves shows the match list.
    pub fn resolved_screen(&self) -> Screen {
        if self.screen == Screen::Chat && (self.active_match().is_none() || self.own_profile.is_none()) {
            Screen::Matches
        } else {
            self.screen
        }
    }

    pub fn complete_onboarding(&mut self, profile: GroupProfile) {
        self.own_profile = Some(profile);
        self.screen = Screen::Browse;
    }

    /// Prepends a new match for `group`. Always succeeds.
    pub fn record_match(&mut self, group: GroupProfile) -> &Match {
        self.matches.insert(
            0,
            Match {
                id: Uuid::new_v4(),
                group,
                last_message: None,
            },
        );
        &self.matches[0]
    }

    /// Opens the conversation for `match_id`.
    ///
    /// Falls back to the match list, returning `None`, when the id does not
    /// resolve or onboarding has not been completed.
    pub fn open_chat(&mut self, match_id: Uuid) -> Option<&Match> {
        if self.own_profile.is_none() || self.find_match(match_id).is_none() {
            self.active_match_id = None;
            self.screen = Screen::Matches;
            return None;
        }
        self.active_match_id = Some(match_id);
        self.screen = Screen::Chat;
        self.find_match(match_id)
    }

    /// Leaves the chat. Only the chat screen has a way back to the match list.
    pub fn return_to_matches(&mut self) -> ActionResult<()> {
        if self.screen != Screen::Chat {
            return Err(ActionError::NotOnScreen(Screen::Chat));
        }
        self.active_match_id = None;
        self.screen = Screen::Matches;
        Ok(())
    }

    /// Tab-bar navigation. Leaving the chat closes the active conversation.
    ///
    /// The tab bar is hidden during onboarding, so a signed-out session has to
    /// finish onboarding again before it can reach any tab.
    pub fn navigate(&mut self, screen: Screen) -> ActionResult<()> {
        if !screen.is_tab() {
            return Err(ActionError::UnreachableScreen(screen));
        }
        if self.own_profile.is_none() || self.screen == Screen::Onboarding {
            return Err(ActionError::ProfileRequired);
        }
        self.active_match_id = None;
        self.screen = screen;
        Ok(())
    }

    /// Returns to onboarding. Matches recorded so far are kept.
    pub fn sign_out(&mut self) {
        self.active_match_id = None;
        self.screen = Screen::Onboarding;
    }

    /// Updates the preview line shown in the match list.
    pub fn set_last_message(&mut self, match_id: Uuid, text: &str) -> bool {
        match self.matches.iter_mut().find(|m| m.id == match_id) {
            Some(m) => {
                m.last_message = Some(text.to_string());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn onboarded() -> AppSession {
        let mut session = AppSession::default();
        let mut me = seed::candidate_groups().remove(0);
        me.id = "user-group".to_string();
        session.complete_onboarding(me);
        session
    }

    #[test]
    fn onboarding_leads_to_browse() {
        let session = onboarded();
        assert_eq!(session.screen(), Screen::Browse);
        assert!(session.own_profile().is_some());
    }

    #[test]
    fn matches_are_prepended_with_unique_ids() {
        let mut session = onboarded();
        let groups = seed::candidate_groups();
        let first = session.record_match(groups[0].clone()).id;
        let second = session.record_match(groups[1].clone()).id;
        assert_ne!(first, second);
        assert_eq!(session.matches()[0].id, second);
        assert_eq!(session.matches()[1].group, groups[0]);
    }

    #[test]
    fn open_chat_with_stale_id_falls_back_to_matches() {
        let mut session = onboarded();
        assert!(session.open_chat(Uuid::new_v4()).is_none());
        assert_eq!(session.screen(), Screen::Matches);
        assert_eq!(session.active_match_id(), None);
    }

    #[test]
    fn open_chat_without_profile_falls_back_to_matches() {
        let mut session = AppSession::default();
        let id = session.record_match(seed::candidate_groups().remove(1)).id;
        assert!(session.open_chat(id).is_none());
        assert_eq!(session.screen(), Screen::Matches);
    }

    #[test]
    fn chat_round_trip_clears_active_match() {
        let mut session = onboarded();
        let id = session.record_match(seed::candidate_groups().remove(2)).id;
        assert_eq!(session.open_chat(id).map(|m| m.id), Some(id));
        assert_eq!(session.resolved_screen(), Screen::Chat);
        session.return_to_matches().unwrap();
        assert_eq!(session.screen(), Screen::Matches);
        assert_eq!(session.active_match_id(), None);
    }

    #[test]
    fn return_to_matches_only_leaves_the_chat() {
        let mut fresh = AppSession::default();
        assert_eq!(
            fresh.return_to_matches(),
            Err(ActionError::NotOnScreen(Screen::Chat))
        );
        assert_eq!(fresh.screen(), Screen::Onboarding);

        let mut session = onboarded();
        assert_eq!(
            session.return_to_matches(),
            Err(ActionError::NotOnScreen(Screen::Chat))
        );
        assert_eq!(session.screen(), Screen::Browse);
    }

    #[test]
    fn navigation_requires_profile_and_a_tab() {
        let mut fresh = AppSession::default();
        assert_eq!(
            fresh.navigate(Screen::Browse),
            Err(ActionError::ProfileRequired)
        );

        let mut session = onboarded();
        assert_eq!(
            session.navigate(Screen::Chat),
            Err(ActionError::UnreachableScreen(Screen::Chat))
        );
        session.navigate(Screen::Checklist).unwrap();
        assert_eq!(session.screen(), Screen::Checklist);
    }

    #[test]
    fn sign_out_keeps_matches() {
        let mut session = onboarded();
        session.record_match(seed::candidate_groups().remove(0));
        session.navigate(Screen::Profile).unwrap();
        session.sign_out();
        assert_eq!(session.screen(), Screen::Onboarding);
        assert_eq!(session.matches().len(), 1);
    }

    #[test]
    fn signed_out_session_cannot_skip_onboarding() {
        let mut session = onboarded();
        session.navigate(Screen::Profile).unwrap();
        session.sign_out();
        assert_eq!(
            session.navigate(Screen::Browse),
            Err(ActionError::ProfileRequired)
        );
        assert_eq!(session.screen(), Screen::Onboarding);

        let mut me = seed::candidate_groups().remove(1);
        me.id = "user-group".to_string();
        session.complete_onboarding(me);
        session.navigate(Screen::Matches).unwrap();
        assert_eq!(session.screen(), Screen::Matches);
    }

    #[test]
    fn last_message_preview_is_updated() {
        let mut session = onboarded();
        let id = session.record_match(seed::candidate_groups().remove(0)).id;
        assert!(session.set_last_message(id, "¿Sábado?"));
        assert_eq!(session.matches()[0].last_message.as_deref(), Some("¿Sábado?"));
        assert!(!session.set_last_message(Uuid::new_v4(), "nada"));
    }
}
