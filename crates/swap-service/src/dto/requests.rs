//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`. Shape checks (lengths,
//! formats) live here; enum-like fields stay strings so that the domain
//! parsers report them with field-level errors.

use serde::Deserialize;
use swap_core::Id;
use validator::{Validate, ValidationError};

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    pub password2: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    pub last_name: String,
}

/// Letters, digits and `@ . + - _`
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let ok = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("username");
        err.message = Some("Username may contain only letters, numbers, and @/./+/-/_".into());
        Err(err)
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub refresh: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 255, message = "Profile photo must be at most 255 characters"))]
    pub profile_photo: Option<String>,

    #[validate(length(max = 255, message = "Availability must be at most 255 characters"))]
    pub availability: Option<String>,

    pub is_public: Option<bool>,
}

// ============================================================================
// Skill Requests
// ============================================================================

/// Add a skill to the caller's list
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub skill_name: String,

    /// `offered` or `wanted`
    pub skill_type: String,

    #[serde(default = "default_proficiency")]
    pub proficiency_level: i16,
}

fn default_proficiency() -> i16 {
    swap_core::Proficiency::DEFAULT.value()
}

/// Change direction or level of a listed skill
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserSkillRequest {
    pub skill_type: Option<String>,
    pub proficiency_level: Option<i16>,
}

/// Catalogue entry created by an administrator
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub name: String,
}

/// Catalogue edit; an absent name leaves the entry unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub name: Option<String>,
}

// ============================================================================
// Swap Requests
// ============================================================================

/// Propose a swap; the caller is always the requester
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSwapRequest {
    pub recipient: Id,
    pub requester_skill: Id,
    pub recipient_skill: Id,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// Move a swap to a new status
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSwapStatusRequest {
    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub status: String,
}

// ============================================================================
// Feedback Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    pub swap_request: Id,
    pub rating: i16,

    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub comment: String,
}

// ============================================================================
// Query Strings
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSkillQuery {
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwapListQuery {
    pub status: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusFilterQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
