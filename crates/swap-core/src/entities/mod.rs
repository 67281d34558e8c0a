//! Domain entities - core business objects

mod account;
mod feedback;
mod profile;
mod skill;
mod swap_request;

pub use account::{Account, NewAccount};
pub use feedback::{Feedback, FeedbackDetails, NewFeedback, FEEDBACK_COMMENT_MAX_LEN};
pub use profile::{Profile, ProfileChanges, PublicProfile};
pub use skill::{
    normalize_catalogue_name, normalize_skill_name, NewUserSkill, Skill, UserSkill,
    SKILL_NAME_MAX_LEN,
};
pub use swap_request::{NewSwapRequest, SwapRequest, SwapRequestDetails};

#[cfg(test)]
pub(crate) use account::sample_account;
