//! Feedback database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for feedback table
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackModel {
    pub id: i64,
    pub swap_request_id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// feedback row joined with both usernames
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackDetailsModel {
    #[sqlx(flatten)]
    pub feedback: FeedbackModel,
    pub from_username: String,
    pub to_username: String,
}
