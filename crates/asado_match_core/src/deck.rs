//! crates/asado_match_core/src/deck.rs
//!
//! The candidate browser: a fixed, cyclic list of mock groups and a cursor.

use crate::domain::{Direction, GroupProfile};
use crate::error::{ActionError, ActionResult};
use crate::seed;

/// A decision taken but not yet settled.
///
/// `candidate` is the profile that was on screen when the decision was made.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDecision {
    pub direction: Direction,
    pub candidate: GroupProfile,
}

#[derive(Debug)]
pub struct CandidateDeck {
    candidates: Vec<GroupProfile>,
    cursor: usize,
    last_direction: Option<Direction>,
}

impl CandidateDeck {
    pub fn new(candidates: Vec<GroupProfile>) -> Self {
        Self {
            candidates,
            cursor: 0,
            last_direction: None,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::candidate_groups())
    }

    pub fn current(&self) -> Option<&GroupProfile> {
        self.candidates.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The direction of the decision still settling, for transient feedback.
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Records a decision on the current candidate.
    ///
    /// A second decision before the first has settled is refused.
    pub fn decide(&mut self, direction: Direction) -> ActionResult<PendingDecision> {
        let candidate = self.current().cloned().ok_or(ActionError::NoCandidates)?;
        if self.last_direction.is_some() {
            return Err(ActionError::DecisionPending);
        }
        self.last_direction = Some(direction);
        Ok(PendingDecision {
            direction,
            candidate,
        })
    }

    /// Advances the cursor by one, wrapping to the first candidate.
    pub fn settle(&mut self) -> usize {
        self.last_direction = None;
        if !self.candidates.is_empty() {
            self.cursor = (self.cursor + 1) % self.candidates.len();
        }
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_captures_the_candidate_on_screen() {
        let mut deck = CandidateDeck::seeded();
        let shown = deck.current().cloned().unwrap();
        let pending = deck.decide(Direction::Accept).unwrap();
        assert_eq!(pending.candidate, shown);
        assert_eq!(deck.last_direction(), Some(Direction::Accept));
    }

    #[test]
    fn cursor_advances_modulo_len_regardless_of_direction() {
        let mut deck = CandidateDeck::seeded();
        let len = deck.len();
        for step in 0..(len * 2 + 1) {
            let direction = if step % 2 == 0 {
                Direction::Accept
            } else {
                Direction::Reject
            };
            let before = deck.cursor();
            deck.decide(direction).unwrap();
            assert_eq!(deck.settle(), (before + 1) % len);
            assert_eq!(deck.last_direction(), None);
        }
    }

    #[test]
    fn second_decision_waits_for_settle() {
        let mut deck = CandidateDeck::seeded();
        deck.decide(Direction::Reject).unwrap();
        assert_eq!(
            deck.decide(Direction::Accept).unwrap_err(),
            ActionError::DecisionPending
        );
        deck.settle();
        assert!(deck.decide(Direction::Accept).is_ok());
    }

    #[test]
    fn empty_deck_is_terminal() {
        let mut deck = CandidateDeck::new(Vec::new());
        assert!(deck.current().is_none());
        assert_eq!(
            deck.decide(Direction::Accept).unwrap_err(),
            ActionError::NoCandidates
        );
        assert_eq!(deck.settle(), 0);
    }
}
