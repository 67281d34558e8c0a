//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Id, SkillType, SwapStatus};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(Id),

    #[error("Profile not found for account {0}")]
    ProfileNotFound(Id),

    #[error("Skill not found: {0}")]
    SkillNotFound(Id),

    #[error("User skill not found: {0}")]
    UserSkillNotFound(Id),

    #[error("Swap request not found: {0}")]
    SwapRequestNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{field}: {message}")]
    InvalidField { field: &'static str, message: String },

    #[error("Proficiency level must be between 1 and 5, got {0}")]
    InvalidProficiency(i16),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i16),

    #[error("Skill type must be 'offered' or 'wanted', got '{0}'")]
    InvalidSkillType(String),

    #[error("Unknown swap status '{0}'")]
    InvalidSwapStatus(String),

    #[error("Password fields didn't match")]
    PasswordMismatch,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You can only offer your own skills")]
    RequesterSkillNotOwned,

    #[error("You can only request skills from their owner")]
    RecipientSkillNotOwned,

    #[error("Only the recipient can accept or reject a request")]
    NotRecipient,

    #[error("Only participants in this swap can perform this action")]
    NotParticipant,

    #[error("Only the requester can delete a swap request")]
    NotRequester,

    #[error("Administrator access required")]
    AdminRequired,

    // =========================================================================
    // Uniqueness Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    #[error("A skill with this name already exists")]
    DuplicateSkillName,

    #[error("This skill is already in your {0} skills list")]
    DuplicateUserSkill(SkillType),

    #[error("A similar swap request already exists")]
    DuplicatePendingSwap,

    #[error("You have already provided feedback for this swap")]
    DuplicateFeedback,

    // =========================================================================
    // Concurrency Errors
    // =========================================================================
    #[error("Swap request status changed concurrently")]
    SwapStatusChanged,

    // =========================================================================
    // Workflow Errors
    // =========================================================================
    #[error("Cannot change swap status from {from} to {to}")]
    InvalidTransition { from: SwapStatus, to: SwapStatus },

    #[error("You can only delete pending swap requests")]
    SwapNotPending,

    #[error("You can only provide feedback for completed swaps")]
    SwapNotCompleted,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a field-level validation failure
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::SkillNotFound(_) => "UNKNOWN_SKILL",
            Self::UserSkillNotFound(_) => "UNKNOWN_USER_SKILL",
            Self::SwapRequestNotFound(_) => "UNKNOWN_SWAP_REQUEST",

            // Validation
            Self::ValidationError(_) | Self::InvalidField { .. } => "VALIDATION_ERROR",
            Self::InvalidProficiency(_) => "INVALID_PROFICIENCY",
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::InvalidSkillType(_) => "INVALID_SKILL_TYPE",
            Self::InvalidSwapStatus(_) => "INVALID_SWAP_STATUS",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",

            // Authorization
            Self::RequesterSkillNotOwned => "REQUESTER_SKILL_NOT_OWNED",
            Self::RecipientSkillNotOwned => "RECIPIENT_SKILL_NOT_OWNED",
            Self::NotRecipient => "NOT_RECIPIENT",
            Self::NotParticipant => "NOT_PARTICIPANT",
            Self::NotRequester => "NOT_REQUESTER",
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Uniqueness
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::DuplicateSkillName => "DUPLICATE_SKILL_NAME",
            Self::DuplicateUserSkill(_) => "DUPLICATE_USER_SKILL",
            Self::DuplicatePendingSwap => "DUPLICATE_PENDING_SWAP",
            Self::DuplicateFeedback => "DUPLICATE_FEEDBACK",

            // Concurrency
            Self::SwapStatusChanged => "SWAP_STATUS_CHANGED",

            // Workflow
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::SwapNotPending => "SWAP_NOT_PENDING",
            Self::SwapNotCompleted => "SWAP_NOT_COMPLETED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Request field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidField { field, .. } => Some(field),
            Self::InvalidProficiency(_) => Some("proficiency_level"),
            Self::InvalidRating(_) => Some("rating"),
            Self::InvalidSkillType(_) => Some("skill_type"),
            Self::InvalidSwapStatus(_) | Self::InvalidTransition { .. } => Some("status"),
            Self::PasswordMismatch => Some("password"),
            Self::UsernameTaken => Some("username"),
            Self::DuplicateSkillName => Some("name"),
            Self::RequesterSkillNotOwned => Some("requester_skill"),
            Self::RecipientSkillNotOwned => Some("recipient_skill"),
            Self::SwapNotCompleted => Some("swap_request"),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::SkillNotFound(_)
                | Self::UserSkillNotFound(_)
                | Self::SwapRequestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidField { .. }
                | Self::InvalidProficiency(_)
                | Self::InvalidRating(_)
                | Self::InvalidSkillType(_)
                | Self::InvalidSwapStatus(_)
                | Self::PasswordMismatch
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::RequesterSkillNotOwned
                | Self::RecipientSkillNotOwned
                | Self::NotRecipient
                | Self::NotParticipant
                | Self::NotRequester
                | Self::AdminRequired
        )
    }

    /// Check if this breaks a uniqueness rule
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken
                | Self::DuplicateSkillName
                | Self::DuplicateUserSkill(_)
                | Self::DuplicatePendingSwap
                | Self::DuplicateFeedback
        )
    }

    /// Check if a concurrent writer got there first
    pub fn is_stale_write(&self) -> bool {
        matches!(self, Self::SwapStatusChanged)
    }

    /// Check if this is an illegal status change
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if the operation needs a state the object has not reached
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::SwapNotPending | Self::SwapNotCompleted)
    }
}
