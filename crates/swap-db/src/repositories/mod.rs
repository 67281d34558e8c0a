//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in swap-core.

mod account;
mod error;
mod feedback;
mod pattern;
mod profile;
mod skill;
mod swap_request;
mod user_skill;

pub use account::PgAccountRepository;
pub use feedback::PgFeedbackRepository;
pub use profile::PgProfileRepository;
pub use skill::PgSkillRepository;
pub use swap_request::PgSwapRequestRepository;
pub use user_skill::PgUserSkillRepository;
