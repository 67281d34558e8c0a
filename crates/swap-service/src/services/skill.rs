//! Skill catalogue and the caller's own skill list

use swap_core::entities::{normalize_skill_name, NewUserSkill, UserSkill};
use swap_core::{Capabilities, Caller, DomainError, Id, Proficiency, SkillType};
use tracing::{info, instrument};

use crate::dto::{
    map_all, CreateUserSkillRequest, SkillResponse, UpdateUserSkillRequest, UserSkillResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Public skill catalogue
pub struct SkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Approved skills, optionally filtered by a name substring
    #[instrument(skip(self))]
    pub async fn list_skills(&self, search: Option<&str>) -> ServiceResult<Vec<SkillResponse>> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let skills = self.ctx.skill_repo().list_approved(search).await?;
        Ok(map_all(skills))
    }
}

/// Skills listed by the caller. Another account's rows are reported as not found.
pub struct UserSkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserSkillService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, caller: Caller, skill_type: Option<&str>) -> ServiceResult<Vec<UserSkillResponse>> {
        let skill_type = skill_type.map(str::parse::<SkillType>).transpose()?;
        let skills = self.ctx.user_skill_repo().find_by_account(caller.id, skill_type).await?;
        Ok(map_all(skills))
    }

    #[instrument(skip(self, request), fields(skill_name = %request.skill_name))]
    pub async fn create(&self, caller: Caller, request: CreateUserSkillRequest) -> ServiceResult<UserSkillResponse> {
        let name = normalize_skill_name(&request.skill_name)?;
        let skill_type: SkillType = request.skill_type.parse()?;
        let proficiency = Proficiency::new(request.proficiency_level)?;

        let skill = self.ctx.skill_repo().get_or_create(&name).await?;
        let created = self
            .ctx
            .user_skill_repo()
            .create(&NewUserSkill {
                account_id: caller.id,
                skill_id: skill.id,
                skill_type,
                proficiency,
            })
            .await?;

        info!(user_skill_id = %created.id, skill_id = %skill.id, "User skill added");

        Ok(created.into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, caller: Caller, id: Id) -> ServiceResult<UserSkillResponse> {
        Ok(self.owned(caller, id).await?.into())
    }

    /// Change type or level; the (account, skill, type) triple stays unique
    #[instrument(skip(self, request))]
    pub async fn update(&self, caller: Caller, id: Id, request: UpdateUserSkillRequest) -> ServiceResult<UserSkillResponse> {
        let mut skill = self.owned(caller, id).await?;

        if let Some(skill_type) = request.skill_type {
            skill.skill_type = skill_type.parse()?;
        }
        if let Some(level) = request.proficiency_level {
            skill.proficiency = Proficiency::new(level)?;
        }

        self.ctx.user_skill_repo().update(&skill).await?;

        info!(user_skill_id = %id, "User skill updated");

        Ok(skill.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Id) -> ServiceResult<()> {
        self.owned(caller, id).await?;
        self.ctx.user_skill_repo().delete(id).await?;

        info!(user_skill_id = %id, "User skill removed");
        Ok(())
    }

    async fn owned(&self, caller: Caller, id: Id) -> ServiceResult<UserSkill> {
        let skill = self
            .ctx
            .user_skill_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserSkillNotFound(id))?;
        Capabilities::for_owned(skill.account_id, &caller)
            .require_any(Capabilities::OWNER, || DomainError::UserSkillNotFound(id))?;
        Ok(skill)
    }
}
