//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are plain numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use swap_common::auth::TokenPair;
use swap_core::{Id, Proficiency, Rating, SkillType, SwapStatus};

// ============================================================================
// Auth Responses
// ============================================================================

/// Token pair plus the authenticated account
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: AccountResponse,
}

/// Account as seen by itself or an admin
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

// ============================================================================
// Profile Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub availability: Option<String>,
    pub is_public: bool,
    pub is_admin: bool,
}

/// Discovery result: public profile fields plus the account's skills
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfileResponse {
    pub id: Id,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_photo: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub user_skills: Vec<UserSkillInfoResponse>,
}

// ============================================================================
// Skill Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: Id,
    pub name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserSkillResponse {
    pub id: Id,
    pub skill: Id,
    pub skill_name: String,
    pub skill_type: SkillType,
    pub proficiency_level: Proficiency,
    pub created_at: DateTime<Utc>,
}

/// Compact skill row embedded in search results
#[derive(Debug, Clone, Serialize)]
pub struct UserSkillInfoResponse {
    pub id: Id,
    pub skill_name: String,
    pub skill_type: SkillType,
    pub proficiency_level: Proficiency,
}

// ============================================================================
// Swap / Feedback Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SwapRequestResponse {
    pub id: Id,
    pub requester: Id,
    pub recipient: Id,
    pub requester_username: String,
    pub recipient_username: String,
    pub requester_skill: Option<Id>,
    pub recipient_skill: Option<Id>,
    pub requester_skill_name: Option<String>,
    pub recipient_skill_name: Option<String>,
    pub status: SwapStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: Id,
    pub swap_request: Id,
    pub from_user: Id,
    pub to_user: Id,
    pub from_username: String,
    pub to_username: String,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Misc Responses
// ============================================================================

/// Acknowledgement for admin toggles
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const fn new(status: &'static str) -> Self {
        Self { status }
    }
}

/// Rendered CSV export
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub body: Vec<u8>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
