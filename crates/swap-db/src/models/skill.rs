//! Skill and user skill database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for skills table
#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: i64,
    pub name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// user_skills row joined with the skill name
#[derive(Debug, Clone, FromRow)]
pub struct UserSkillModel {
    pub id: i64,
    pub account_id: i64,
    pub skill_id: i64,
    pub skill_name: String,
    pub skill_type: String,
    pub proficiency_level: i16,
    pub created_at: DateTime<Utc>,
}
