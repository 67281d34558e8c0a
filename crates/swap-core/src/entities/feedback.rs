//! Feedback entity - a rating left after a completed swap

use chrono::{DateTime, Utc};

use crate::value_objects::{Id, Rating};

/// Maximum comment length in characters
pub const FEEDBACK_COMMENT_MAX_LEN: usize = 2000;

/// Immutable once written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: Id,
    pub swap_request_id: Id,
    pub from_account_id: Id,
    pub to_account_id: Id,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub swap_request_id: Id,
    pub from_account_id: Id,
    pub to_account_id: Id,
    pub rating: Rating,
    pub comment: String,
}

/// Feedback joined with both usernames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDetails {
    pub feedback: Feedback,
    pub from_username: String,
    pub to_username: String,
}
