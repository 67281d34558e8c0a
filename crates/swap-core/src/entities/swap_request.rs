//! SwapRequest entity and its status workflow guard

use chrono::{DateTime, Utc};

use super::UserSkill;
use crate::access::{Caller, Capabilities};
use crate::error::DomainError;
use crate::value_objects::{Id, SwapStatus};

/// A proposed exchange of the requester's skill for the recipient's skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub id: Id,
    pub requester_id: Id,
    pub recipient_id: Id,
    /// Cleared when the referenced user skill is deleted
    pub requester_skill_id: Option<Id>,
    pub recipient_skill_id: Option<Id>,
    pub status: SwapStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SwapRequest {
    /// Requester or recipient
    #[inline]
    pub fn is_participant(&self, account_id: Id) -> bool {
        self.requester_id == account_id || self.recipient_id == account_id
    }

    /// The participant on the other side of the swap
    pub fn counterpart(&self, account_id: Id) -> Option<Id> {
        if account_id == self.requester_id {
            Some(self.recipient_id)
        } else if account_id == self.recipient_id {
            Some(self.requester_id)
        } else {
            None
        }
    }

    /// Check that `caller` may move this request to `target`.
    ///
    /// The target state is checked before the caller's role, so an illegal
    /// edge is reported as such even to a caller who could never drive it.
    pub fn authorize_transition(&self, caller: &Caller, target: SwapStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }

        let caps = Capabilities::for_swap(self, caller);
        match self.status {
            SwapStatus::Pending => caps.require_any(Capabilities::RECIPIENT, || DomainError::NotRecipient),
            _ => caps.require_any(Capabilities::PARTICIPANT, || DomainError::NotParticipant),
        }
    }

    /// Only a pending request may be withdrawn, and only by its requester
    pub fn authorize_deletion(&self, caller: &Caller) -> Result<(), DomainError> {
        if self.status != SwapStatus::Pending {
            return Err(DomainError::SwapNotPending);
        }
        Capabilities::for_swap(self, caller).require_any(Capabilities::REQUESTER, || DomainError::NotRequester)
    }

    /// Resolve who receives feedback from `caller`.
    ///
    /// Status is checked before participation.
    pub fn feedback_target(&self, caller: &Caller) -> Result<Id, DomainError> {
        if self.status != SwapStatus::Completed {
            return Err(DomainError::SwapNotCompleted);
        }
        self.counterpart(caller.id).ok_or(DomainError::NotParticipant)
    }
}

/// Insert payload; new requests always start as pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSwapRequest {
    pub requester_id: Id,
    pub recipient_id: Id,
    pub requester_skill_id: Id,
    pub recipient_skill_id: Id,
    pub message: Option<String>,
}

impl NewSwapRequest {
    /// Build a request from the caller's perspective, enforcing skill ownership
    pub fn propose(
        caller: &Caller,
        recipient_id: Id,
        requester_skill: &UserSkill,
        recipient_skill: &UserSkill,
        message: Option<String>,
    ) -> Result<Self, DomainError> {
        if !requester_skill.is_owned_by(caller.id) {
            return Err(DomainError::RequesterSkillNotOwned);
        }
        if !recipient_skill.is_owned_by(recipient_id) {
            return Err(DomainError::RecipientSkillNotOwned);
        }
        if recipient_id == caller.id {
            return Err(DomainError::invalid(
                "recipient",
                "You cannot send a swap request to yourself.",
            ));
        }

        Ok(Self {
            requester_id: caller.id,
            recipient_id,
            requester_skill_id: requester_skill.id,
            recipient_skill_id: recipient_skill.id,
            message: message.filter(|m| !m.trim().is_empty()),
        })
    }
}

/// Swap request joined with the names clients display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequestDetails {
    pub request: SwapRequest,
    pub requester_username: String,
    pub recipient_username: String,
    pub requester_skill_name: Option<String>,
    pub recipient_skill_name: Option<String>,
}
