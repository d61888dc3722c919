//! crates/asado_match_core/src/checklist.rs
//!
//! The shared barbecue checklist and its "ask the grill master" advice panel.

use crate::domain::{AsadoItem, ItemCategory};
use crate::error::{ActionError, ActionResult};
use crate::generation::{GenerationRequest, PendingRequest, Ticket};
use crate::seed;

#[derive(Debug)]
pub struct Checklist {
    items: Vec<AsadoItem>,
}

impl Checklist {
    pub fn new(items: Vec<AsadoItem>) -> Self {
        Self { items }
    }

    pub fn seeded() -> Self {
        Self::new(seed::checklist_items())
    }

    pub fn items(&self) -> &[AsadoItem] {
        &self.items
    }

    /// Flips the checked flag of one item and returns its new value.
    pub fn toggle(&mut self, item_id: u32) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id == item_id)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Percentage of checked items, rounded half up. An empty list is 0%.
    pub fn progress(&self) -> u8 {
        let total = self.items.len();
        if total == 0 {
            return 0;
        }
        ((self.checked_count() * 200 + total) / (total * 2)) as u8
    }

    /// Categories in order of first appearance.
    pub fn categories(&self) -> Vec<ItemCategory> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }

    pub fn items_in(&self, category: ItemCategory) -> impl Iterator<Item = &AsadoItem> + '_ {
        self.items.iter().filter(move |i| i.category == category)
    }
}

//=========================================================================================
// Advice panel
//=========================================================================================

#[derive(Debug, Default)]
pub struct AdvicePanel {
    pub open: bool,
    query: String,
    answer: Option<String>,
    request: PendingRequest,
}

impl AdvicePanel {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn is_asking(&self) -> bool {
        self.request.is_pending()
    }

    /// Input is accepted while no answer is displayed and nothing is in flight.
    pub fn accepts_input(&self) -> bool {
        self.answer.is_none() && !self.request.is_pending()
    }

    pub fn toggle_open(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    fn ensure_input(&self) -> ActionResult<()> {
        if self.answer.is_some() {
            Err(ActionError::AnswerShown)
        } else if self.request.is_pending() {
            Err(ActionError::RequestInFlight)
        } else {
            Ok(())
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> ActionResult<()> {
        self.ensure_input()?;
        self.query = query.into();
        Ok(())
    }

    pub fn begin_ask(&mut self) -> ActionResult<(Ticket, GenerationRequest)> {
        self.ensure_input()?;
        if self.query.trim().is_empty() {
            return Err(ActionError::EmptyQuery);
        }
        let ticket = self.request.begin()?;
        Ok((
            ticket,
            GenerationRequest::Advice {
                query: self.query.clone(),
            },
        ))
    }

    pub fn apply_answer(&mut self, ticket: Ticket, answer: String) -> bool {
        if !self.request.complete(ticket) {
            return false;
        }
        self.answer = Some(answer);
        true
    }

    /// Clears the displayed answer so another question can be asked.
    pub fn new_query(&mut self) {
        self.answer = None;
    }
}
