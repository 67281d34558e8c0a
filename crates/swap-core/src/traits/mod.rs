//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AccountRepository, FeedbackRepository, ProfileRepository, RepoResult, SkillRepository,
    SwapQuery, SwapRequestRepository, SwapRole, UserSkillRepository,
};
