//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of a request.

pub mod admin;
pub mod auth;
pub mod context;
pub mod error;
pub mod export;
pub mod feedback;
pub mod profile;
pub mod search;
pub mod skill;
pub mod swap;

#[cfg(test)]
pub(crate) mod testing;

pub use admin::AdminService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use export::{ExportKind, ExportService};
pub use feedback::FeedbackService;
pub use profile::ProfileService;
pub use search::SearchService;
pub use skill::{SkillService, UserSkillService};
pub use swap::SwapService;
