//! Swap request database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for swap_requests table
#[derive(Debug, Clone, FromRow)]
pub struct SwapRequestModel {
    pub id: i64,
    pub requester_id: i64,
    pub recipient_id: i64,
    pub requester_skill_id: Option<i64>,
    pub recipient_skill_id: Option<i64>,
    pub status: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// swap_requests row joined with usernames and skill names
#[derive(Debug, Clone, FromRow)]
pub struct SwapRequestDetailsModel {
    #[sqlx(flatten)]
    pub request: SwapRequestModel,
    pub requester_username: String,
    pub recipient_username: String,
    pub requester_skill_name: Option<String>,
    pub recipient_skill_name: Option<String>,
}
