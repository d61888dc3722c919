//! crates/asado_match_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lower and upper bound of every vibe axis.
pub const VIBE_MIN: f32 = 0.0;
pub const VIBE_MAX: f32 = 100.0;

/// Builds the placeholder image reference for a numeric seed.
pub fn image_url(seed: u32) -> String {
    format!("https://picsum.photos/400/600?random={}", seed)
}

/// The three affinity axes shown on a group's radar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibeStats {
    pub party: f32,
    pub foodie: f32,
    pub chill: f32,
}

impl VibeStats {
    /// Builds a `VibeStats`, clamping every axis into `[VIBE_MIN, VIBE_MAX]`.
    pub fn new(party: f32, foodie: f32, chill: f32) -> Self {
        Self {
            party: clamp_axis(party),
            foodie: clamp_axis(foodie),
            chill: clamp_axis(chill),
        }
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        return VIBE_MIN;
    }
    value.clamp(VIBE_MIN, VIBE_MAX)
}

/// A group of friends looking for another group to share a barbecue with.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupProfile {
    pub id: String,
    pub name: String,
    pub motto: String,
    pub member_count: u8,
    pub image_url: String,
    pub availability: String,
    pub location: String,
    pub vibe: VibeStats,
}

/// An accepted candidate, paired with a conversation thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: Uuid,
    pub group: GroupProfile,
    pub last_message: Option<String>,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Them,
    System,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_system(&self) -> bool {
        self.sender == Sender::System
    }
}

/// The closed set of checklist categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Fire,
    Meat,
    Drink,
    Other,
}

impl ItemCategory {
    /// Display label used by the Spanish-language client.
    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Fire => "Fuego",
            ItemCategory::Meat => "Carne",
            ItemCategory::Drink => "Bebida",
            ItemCategory::Other => "Varios",
        }
    }
}

/// One line of the shared barbecue checklist.
#[derive(Debug, Clone, PartialEq)]
pub struct AsadoItem {
    pub id: u32,
    pub name: String,
    pub category: ItemCategory,
    pub checked: bool,
    pub assigned_to: Option<String>,
}

/// The views the top-level coordinator switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Browse,
    Matches,
    Chat,
    Checklist,
    Profile,
}

impl Screen {
    /// Screens reachable directly from the tab bar.
    pub const TABS: [Screen; 4] = [
        Screen::Browse,
        Screen::Matches,
        Screen::Checklist,
        Screen::Profile,
    ];

    pub fn is_tab(self) -> bool {
        Self::TABS.contains(&self)
    }
}

/// A swipe decision on the current candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Accept,
    Reject,
}
