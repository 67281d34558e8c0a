//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod feedback;
mod profile;
mod skill;
mod swap_request;

pub use account::AccountModel;
pub use feedback::{FeedbackDetailsModel, FeedbackModel};
pub use profile::{ProfileModel, PublicProfileModel};
pub use skill::{SkillModel, UserSkillModel};
pub use swap_request::{SwapRequestDetailsModel, SwapRequestModel};
