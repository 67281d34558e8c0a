//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod admin;
pub mod auth;
pub mod feedback;
pub mod health;
pub mod profile;
pub mod skills;
pub mod swaps;
pub mod user_skills;
pub mod users;
