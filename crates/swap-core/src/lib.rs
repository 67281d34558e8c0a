//! # swap-core
//!
//! Domain layer containing entities, value objects, access rules and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod access;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{Caller, Capabilities};
pub use entities::{
    normalize_catalogue_name, normalize_skill_name, Account, Feedback, FeedbackDetails, NewAccount, NewFeedback,
    NewSwapRequest, NewUserSkill, Profile, ProfileChanges, PublicProfile, Skill, SwapRequest,
    SwapRequestDetails, UserSkill, FEEDBACK_COMMENT_MAX_LEN, SKILL_NAME_MAX_LEN,
};
pub use error::DomainError;
pub use traits::{
    AccountRepository, FeedbackRepository, ProfileRepository, RepoResult, SkillRepository,
    SwapQuery, SwapRequestRepository, SwapRole, UserSkillRepository,
};
pub use value_objects::{Id, IdParseError, Proficiency, Rating, SkillType, SwapStatus};
