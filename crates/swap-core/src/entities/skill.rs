//! Skill catalogue entries and the skills an account lists

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Id, Proficiency, SkillType};

/// Maximum skill name length in characters
pub const SKILL_NAME_MAX_LEN: usize = 100;

/// Catalogue skill, shared by every account that lists it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: Id,
    pub name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Canonical catalogue key for a user-supplied skill name
///
/// Names are trimmed and lower-cased so that "Rust" and " rust " share a row.
pub fn normalize_skill_name(raw: &str) -> Result<String, DomainError> {
    normalize_name("skill_name", raw)
}

/// Same rule for a catalogue entry edited directly, reported against `name`
pub fn normalize_catalogue_name(raw: &str) -> Result<String, DomainError> {
    normalize_name("name", raw)
}

fn normalize_name(field: &'static str, raw: &str) -> Result<String, DomainError> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err(DomainError::invalid(field, "This field may not be blank."));
    }
    if name.chars().count() > SKILL_NAME_MAX_LEN {
        return Err(DomainError::invalid(
            field,
            format!("Ensure this field has no more than {SKILL_NAME_MAX_LEN} characters."),
        ));
    }
    Ok(name)
}

/// A skill listed by an account as offered or wanted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSkill {
    pub id: Id,
    pub account_id: Id,
    pub skill_id: Id,
    pub skill_name: String,
    pub skill_type: SkillType,
    pub proficiency: Proficiency,
    pub created_at: DateTime<Utc>,
}

impl UserSkill {
    #[inline]
    pub fn is_owned_by(&self, account_id: Id) -> bool {
        self.account_id == account_id
    }
}

/// Insert payload for a user skill; the skill row must already exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserSkill {
    pub account_id: Id,
    pub skill_id: Id,
    pub skill_type: SkillType,
    pub proficiency: Proficiency,
}
