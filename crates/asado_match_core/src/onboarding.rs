//! crates/asado_match_core/src/onboarding.rs
//!
//! The two-step profile builder. Step one collects the group's name and size,
//! step two a vibe description and/or motto. Finishing produces the user's
//! own `GroupProfile`.

use crate::domain::{image_url, GroupProfile, VibeStats, VIBE_MAX, VIBE_MIN};
use crate::error::{ActionError, ActionResult};
use crate::generation::{GenerationRequest, PendingRequest, Ticket};
use rand::Rng;

pub const MIN_MEMBERS: u8 = 2;
pub const MAX_MEMBERS: u8 = 10;
pub const DEFAULT_MEMBERS: u8 = 3;

pub const OWN_PROFILE_ID: &str = "user-group";
pub const DEFAULT_MOTTO: &str = "Listos para el fuego";
const DEFAULT_AVAILABILITY: &str = "Sabado Noche";
const DEFAULT_LOCATION: &str = "Playa de la Viuda";
const IMAGE_SEED_RANGE: std::ops::Range<u32> = 0..1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Identity,
    Vibe,
}

#[derive(Debug)]
pub struct ProfileDraft {
    pub step: OnboardingStep,
    pub name: String,
    pub member_count: u8,
    pub vibe_description: String,
    pub motto: String,
    motto_request: PendingRequest,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Identity,
            name: String::new(),
            member_count: DEFAULT_MEMBERS,
            vibe_description: String::new(),
            motto: String::new(),
            motto_request: PendingRequest::default(),
        }
    }
}

impl ProfileDraft {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_member_count(&mut self, count: u8) -> ActionResult<()> {
        if !(MIN_MEMBERS..=MAX_MEMBERS).contains(&count) {
            return Err(ActionError::MemberCountOutOfRange(count));
        }
        self.member_count = count;
        Ok(())
    }

    fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn can_advance(&self) -> bool {
        self.step == OnboardingStep::Identity && self.has_name()
    }

    pub fn advance(&mut self) -> ActionResult<()> {
        if self.step != OnboardingStep::Identity {
            return Err(ActionError::WrongStep("identity"));
        }
        if !self.has_name() {
            return Err(ActionError::NameRequired);
        }
        self.step = OnboardingStep::Vibe;
        Ok(())
    }

    /// Returns to the identity step, keeping everything typed so far.
    pub fn back(&mut self) {
        self.step = OnboardingStep::Identity;
    }

    pub fn set_vibe_description(&mut self, text: impl Into<String>) {
        self.vibe_description = text.into();
    }

    pub fn set_motto(&mut self, motto: impl Into<String>) {
        self.motto = motto.into();
    }

    pub fn is_generating_motto(&self) -> bool {
        self.motto_request.is_pending()
    }

    pub fn can_finish(&self) -> bool {
        self.step == OnboardingStep::Vibe
            && (!self.motto.trim().is_empty() || !self.vibe_description.trim().is_empty())
    }

    /// Starts a motto request from the vibe step. Disabled while another one is outstanding.
    pub fn begin_motto(&mut self) -> ActionResult<(Ticket, GenerationRequest)> {
        if self.step != OnboardingStep::Vibe {
            return Err(ActionError::WrongStep("vibe"));
        }
        if !self.has_name() {
            return Err(ActionError::NameRequired);
        }
        let ticket = self.motto_request.begin()?;
        let request = GenerationRequest::Motto {
            group_name: self.name.clone(),
            vibe: self.vibe_description.clone(),
        };
        Ok((ticket, request))
    }

    /// Stores a generated motto. Returns `false` if the ticket is stale.
    pub fn apply_motto(&mut self, ticket: Ticket, motto: String) -> bool {
        if !self.motto_request.complete(ticket) {
            return false;
        }
        self.motto = motto;
        true
    }

    /// Synthesizes the user's own profile.
    ///
    /// The vibe axes are drawn uniformly from the axis range; nothing typed
    /// in the draft feeds them.
    pub fn finish<R: Rng>(&self, rng: &mut R) -> ActionResult<GroupProfile> {
        if self.step != OnboardingStep::Vibe {
            return Err(ActionError::WrongStep("vibe"));
        }
        if !self.can_finish() {
            return Err(ActionError::MottoOrVibeRequired);
        }
        let motto = match self.motto.trim() {
            "" => DEFAULT_MOTTO.to_string(),
            m => m.to_string(),
        };
        Ok(GroupProfile {
            id: OWN_PROFILE_ID.to_string(),
            name: self.name.trim().to_string(),
            motto,
            member_count: self.member_count,
            image_url: image_url(rng.random_range(IMAGE_SEED_RANGE)),
            availability: DEFAULT_AVAILABILITY.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            vibe: VibeStats::new(
                rng.random_range(VIBE_MIN..=VIBE_MAX),
                rng.random_range(VIBE_MIN..=VIBE_MAX),
                rng.random_range(VIBE_MIN..=VIBE_MAX),
            ),
        })
    }
}
