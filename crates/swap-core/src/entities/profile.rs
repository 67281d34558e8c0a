//! Profile entity - public-facing details of an account

use chrono::{DateTime, Utc};

use super::UserSkill;
use crate::value_objects::Id;

/// Profile entity, one per account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Id,
    pub account_id: Id,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub availability: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub availability: Option<String>,
    pub is_public: Option<bool>,
}

impl Profile {
    /// Apply the profile-owned part of a change set
    pub fn apply(&mut self, changes: &ProfileChanges) {
        if let Some(location) = &changes.location {
            self.location = non_blank(location);
        }
        if let Some(photo) = &changes.profile_photo {
            self.profile_photo = non_blank(photo);
        }
        if let Some(availability) = &changes.availability {
            self.availability = non_blank(availability);
        }
        if let Some(is_public) = changes.is_public {
            self.is_public = is_public;
        }
        self.updated_at = Utc::now();
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Search projection of an account with a public profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicProfile {
    pub account_id: Id,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_photo: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub skills: Vec<UserSkill>,
}
