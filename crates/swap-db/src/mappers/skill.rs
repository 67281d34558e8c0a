//! Skill model -> entity mappers
//!
//! Enum and range columns are re-validated on the way out; a row that
//! violates them is reported as a storage fault.

use swap_core::entities::{Skill, UserSkill};
use swap_core::error::DomainError;
use swap_core::value_objects::{Id, Proficiency};

use crate::models::{SkillModel, UserSkillModel};

impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: Id::new(model.id),
            name: model.name,
            is_approved: model.is_approved,
            created_at: model.created_at,
        }
    }
}

impl TryFrom<UserSkillModel> for UserSkill {
    type Error = DomainError;

    fn try_from(model: UserSkillModel) -> Result<Self, Self::Error> {
        Ok(UserSkill {
            id: Id::new(model.id),
            account_id: Id::new(model.account_id),
            skill_id: Id::new(model.skill_id),
            skill_name: model.skill_name,
            skill_type: model.skill_type.parse().map_err(corrupt_row)?,
            proficiency: Proficiency::new(model.proficiency_level).map_err(corrupt_row)?,
            created_at: model.created_at,
        })
    }
}

pub(crate) fn corrupt_row(e: DomainError) -> DomainError {
    DomainError::DatabaseError(format!("corrupt row: {e}"))
}
