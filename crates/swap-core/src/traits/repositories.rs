//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Uniqueness rules are enforced by storage and
//! come back as the matching conflict variant of [`DomainError`].

use async_trait::async_trait;
use std::str::FromStr;

use crate::entities::{
    Account, Feedback, FeedbackDetails, NewAccount, NewFeedback, NewSwapRequest, NewUserSkill,
    Profile, PublicProfile, Skill, SwapRequest, SwapRequestDetails, UserSkill,
};
use crate::error::DomainError;
use crate::value_objects::{Id, SkillType, SwapStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Account>>;

    /// Find account by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>>;

    /// Insert the account and its default profile in one transaction.
    ///
    /// Fails with `UsernameTaken` when the username exists.
    async fn create_with_profile(
        &self,
        account: &NewAccount,
        password_hash: &str,
    ) -> RepoResult<(Account, Profile)>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>>;

    /// Stamp `last_login` with the current time
    async fn record_login(&self, id: Id) -> RepoResult<()>;

    /// Ban (`false`) or reactivate (`true`) an account
    async fn set_active(&self, id: Id, active: bool) -> RepoResult<()>;

    /// All accounts, oldest first
    async fn list(&self) -> RepoResult<Vec<Account>>;

    /// Remove the account; its profile, skills, swaps and feedback go with it
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_account(&self, account_id: Id) -> RepoResult<Option<Profile>>;

    /// Persist account name fields and profile fields in one transaction
    async fn update_with_account(&self, account: &Account, profile: &Profile) -> RepoResult<()>;

    /// Public profiles offering a skill whose name contains `query`
    /// (case-insensitive), each with its full skill list
    async fn search_public(&self, query: &str) -> RepoResult<Vec<PublicProfile>>;
}

// ============================================================================
// Skill Repository
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Skill>>;

    /// Return the skill with this normalized name, creating it approved if absent
    async fn get_or_create(&self, name: &str) -> RepoResult<Skill>;

    /// Approved skills, optionally filtered by name substring
    async fn list_approved(&self, search: Option<&str>) -> RepoResult<Vec<Skill>>;

    /// Every skill regardless of approval
    async fn list_all(&self) -> RepoResult<Vec<Skill>>;

    async fn set_approved(&self, id: Id, approved: bool) -> RepoResult<()>;

    /// Insert a catalogue entry; fails with `DuplicateSkillName` if the name exists
    async fn create(&self, name: &str) -> RepoResult<Skill>;

    /// Change the name; same conflict rule as `create`
    async fn rename(&self, id: Id, name: &str) -> RepoResult<Skill>;

    /// Remove the skill and every user skill listing it
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// UserSkill Repository
// ============================================================================

#[async_trait]
pub trait UserSkillRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<UserSkill>>;

    /// Skills listed by one account, optionally of one type
    async fn find_by_account(
        &self,
        account_id: Id,
        skill_type: Option<SkillType>,
    ) -> RepoResult<Vec<UserSkill>>;

    /// Fails with `DuplicateUserSkill` on an existing (account, skill, type)
    async fn create(&self, user_skill: &NewUserSkill) -> RepoResult<UserSkill>;

    /// Persist type and proficiency; same conflict rule as `create`
    async fn update(&self, user_skill: &UserSkill) -> RepoResult<()>;

    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// SwapRequest Repository
// ============================================================================

/// Which side of the swap the caller is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwapRole {
    Sent,
    Received,
    #[default]
    All,
}

impl FromStr for SwapRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(Self::Sent),
            "received" => Ok(Self::Received),
            "all" => Ok(Self::All),
            _ => Err(DomainError::invalid("role", "Must be one of: sent, received, all.")),
        }
    }
}

/// Filter for listing a participant's swap requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapQuery {
    pub role: SwapRole,
    pub status: Option<SwapStatus>,
}

#[async_trait]
pub trait SwapRequestRepository: Send + Sync {
    /// Find by ID with no visibility filter
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<SwapRequest>>;

    /// Find by ID only if `account_id` is requester or recipient
    async fn find_for_participant(&self, id: Id, account_id: Id) -> RepoResult<Option<SwapRequestDetails>>;

    /// Find by ID with joined names, no visibility filter
    async fn find_details(&self, id: Id) -> RepoResult<Option<SwapRequestDetails>>;

    /// Requests the account takes part in, newest first
    async fn list_for_account(&self, account_id: Id, query: SwapQuery) -> RepoResult<Vec<SwapRequestDetails>>;

    /// Every request, newest first
    async fn list_all(&self, status: Option<SwapStatus>) -> RepoResult<Vec<SwapRequestDetails>>;

    /// Fails with `DuplicatePendingSwap` when an identical request is pending
    async fn create(&self, request: &NewSwapRequest) -> RepoResult<SwapRequest>;

    /// Compare-and-set the status; `false` when the row is no longer in `expected`
    async fn update_status(&self, id: Id, expected: SwapStatus, target: SwapStatus) -> RepoResult<bool>;

    /// Delete only while pending; `false` when nothing was deleted
    async fn delete_pending(&self, id: Id) -> RepoResult<bool>;
}

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Fails with `DuplicateFeedback` when the author already rated this swap
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback>;

    async fn find_details(&self, id: Id) -> RepoResult<Option<FeedbackDetails>>;

    /// Feedback addressed to the account, newest first
    async fn find_received(&self, account_id: Id) -> RepoResult<Vec<FeedbackDetails>>;

    /// Every feedback row, oldest first
    async fn list_all(&self) -> RepoResult<Vec<FeedbackDetails>>;
}
