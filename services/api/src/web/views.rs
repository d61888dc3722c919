//! services/api/src/web/views.rs
//!
//! Serializable views of the core domain, sent to the browser and documented
//! in the OpenAPI specification. The core crate stays free of serde.

use crate::web::state::{OpenConversation, SessionState};
use asado_match_core::{
    AdvicePanel, AsadoItem, CandidateDeck, ChatMessage, Checklist, Direction, GroupProfile,
    ItemCategory, Match, OnboardingStep, ProfileDraft, Screen, Sender,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//=========================================================================================
// Enumerations
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScreenView {
    Onboarding,
    Browse,
    Matches,
    Chat,
    Checklist,
    Profile,
}

impl From<Screen> for ScreenView {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Onboarding => ScreenView::Onboarding,
            Screen::Browse => ScreenView::Browse,
            Screen::Matches => ScreenView::Matches,
            Screen::Chat => ScreenView::Chat,
            Screen::Checklist => ScreenView::Checklist,
            Screen::Profile => ScreenView::Profile,
        }
    }
}

impl From<ScreenView> for Screen {
    fn from(view: ScreenView) -> Self {
        match view {
            ScreenView::Onboarding => Screen::Onboarding,
            ScreenView::Browse => Screen::Browse,
            ScreenView::Matches => Screen::Matches,
            ScreenView::Chat => Screen::Chat,
            ScreenView::Checklist => Screen::Checklist,
            ScreenView::Profile => Screen::Profile,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DirectionView {
    Accept,
    Reject,
}

impl From<Direction> for DirectionView {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Accept => DirectionView::Accept,
            Direction::Reject => DirectionView::Reject,
        }
    }
}

impl From<DirectionView> for Direction {
    fn from(view: DirectionView) -> Self {
        match view {
            DirectionView::Accept => Direction::Accept,
            DirectionView::Reject => Direction::Reject,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SenderView {
    Me,
    Them,
    System,
}

impl From<Sender> for SenderView {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::Me => SenderView::Me,
            Sender::Them => SenderView::Them,
            Sender::System => SenderView::System,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryView {
    Fire,
    Meat,
    Drink,
    Other,
}

impl From<ItemCategory> for CategoryView {
    fn from(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Fire => CategoryView::Fire,
            ItemCategory::Meat => CategoryView::Meat,
            ItemCategory::Drink => CategoryView::Drink,
            ItemCategory::Other => CategoryView::Other,
        }
    }
}

//=========================================================================================
// Entities
//=========================================================================================

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct VibeView {
    pub party: f32,
    pub foodie: f32,
    pub chill: f32,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GroupProfileView {
    pub id: String,
    pub name: String,
    pub motto: String,
    pub member_count: u8,
    pub image_url: String,
    pub availability: String,
    pub location: String,
    pub vibe: VibeView,
}

impl From<&GroupProfile> for GroupProfileView {
    fn from(profile: &GroupProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            motto: profile.motto.clone(),
            member_count: profile.member_count,
            image_url: profile.image_url.clone(),
            availability: profile.availability.clone(),
            location: profile.location.clone(),
            vibe: VibeView {
                party: profile.vibe.party,
                foodie: profile.vibe.foodie,
                chill: profile.vibe.chill,
            },
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MatchView {
    pub id: Uuid,
    pub group: GroupProfileView,
    pub last_message: Option<String>,
}

impl From<&Match> for MatchView {
    fn from(matched: &Match) -> Self {
        Self {
            id: matched.id,
            group: GroupProfileView::from(&matched.group),
            last_message: matched.last_message.clone(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ChatMessageView {
    pub id: Uuid,
    pub sender: SenderView,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_system: bool,
}

impl From<&ChatMessage> for ChatMessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id,
            sender: message.sender.into(),
            text: message.text.clone(),
            timestamp: message.timestamp,
            is_system: message.is_system(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AsadoItemView {
    pub id: u32,
    pub name: String,
    pub category: CategoryView,
    pub category_label: String,
    pub checked: bool,
    pub assigned_to: Option<String>,
}

impl From<&AsadoItem> for AsadoItemView {
    fn from(item: &AsadoItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.into(),
            category_label: item.category.label().to_string(),
            checked: item.checked,
            assigned_to: item.assigned_to.clone(),
        }
    }
}

//=========================================================================================
// Per-view state
//=========================================================================================

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OnboardingView {
    /// 1 while collecting name and size, 2 while collecting vibe and motto.
    pub step: u8,
    pub name: String,
    pub member_count: u8,
    pub vibe_description: String,
    pub motto: String,
    pub generating_motto: bool,
    pub can_advance: bool,
    pub can_finish: bool,
}

impl From<&ProfileDraft> for OnboardingView {
    fn from(draft: &ProfileDraft) -> Self {
        Self {
            step: match draft.step {
                OnboardingStep::Identity => 1,
                OnboardingStep::Vibe => 2,
            },
            name: draft.name.clone(),
            member_count: draft.member_count,
            vibe_description: draft.vibe_description.clone(),
            motto: draft.motto.clone(),
            generating_motto: draft.is_generating_motto(),
            can_advance: draft.can_advance(),
            can_finish: draft.can_finish(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeckView {
    /// `None` once the deck has no candidates at all.
    pub current: Option<GroupProfileView>,
    pub cursor: usize,
    pub total: usize,
    pub last_direction: Option<DirectionView>,
}

impl From<&CandidateDeck> for DeckView {
    fn from(deck: &CandidateDeck) -> Self {
        Self {
            current: deck.current().map(GroupProfileView::from),
            cursor: deck.cursor(),
            total: deck.len(),
            last_direction: deck.last_direction().map(DirectionView::from),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ConversationView {
    pub match_id: Uuid,
    pub messages: Vec<ChatMessageView>,
    pub draft: String,
    pub can_send: bool,
    pub generating_icebreaker: bool,
}

impl From<&OpenConversation> for ConversationView {
    fn from(open: &OpenConversation) -> Self {
        let conversation = &open.conversation;
        Self {
            match_id: conversation.match_id(),
            messages: conversation.messages().iter().map(ChatMessageView::from).collect(),
            draft: conversation.draft.clone(),
            can_send: conversation.can_send(),
            generating_icebreaker: conversation.is_generating_icebreaker(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ChecklistView {
    pub items: Vec<AsadoItemView>,
    pub categories: Vec<CategoryView>,
    pub checked_count: usize,
    pub total_count: usize,
    pub progress: u8,
}

impl From<&Checklist> for ChecklistView {
    fn from(checklist: &Checklist) -> Self {
        Self {
            items: checklist.items().iter().map(AsadoItemView::from).collect(),
            categories: checklist.categories().into_iter().map(CategoryView::from).collect(),
            checked_count: checklist.checked_count(),
            total_count: checklist.items().len(),
            progress: checklist.progress(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AdviceView {
    pub open: bool,
    pub query: String,
    pub answer: Option<String>,
    pub asking: bool,
    pub accepts_input: bool,
}

impl From<&AdvicePanel> for AdviceView {
    fn from(panel: &AdvicePanel) -> Self {
        Self {
            open: panel.open,
            query: panel.query().to_string(),
            answer: panel.answer().map(str::to_string),
            asking: panel.is_asking(),
            accepts_input: panel.accepts_input(),
        }
    }
}

/// The complete state of one session, as rendered by the client.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SessionView {
    pub screen: ScreenView,
    pub own_profile: Option<GroupProfileView>,
    pub matches: Vec<MatchView>,
    pub active_match_id: Option<Uuid>,
    pub onboarding: OnboardingView,
    pub deck: DeckView,
    pub conversation: Option<ConversationView>,
    pub checklist: ChecklistView,
    pub advice: AdviceView,
}

impl From<&SessionState> for SessionView {
    fn from(state: &SessionState) -> Self {
        Self {
            screen: state.app.resolved_screen().into(),
            own_profile: state.app.own_profile().map(GroupProfileView::from),
            matches: state.app.matches().iter().map(MatchView::from).collect(),
            active_match_id: state.app.active_match().map(|m| m.id),
            onboarding: OnboardingView::from(&state.draft),
            deck: DeckView::from(&state.deck),
            conversation: state.conversation.as_ref().map(ConversationView::from),
            checklist: ChecklistView::from(&state.checklist),
            advice: AdviceView::from(&state.advice),
        }
    }
}
