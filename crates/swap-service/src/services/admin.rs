//! Administration service
//!
//! Every operation starts with the admin gate.

use swap_core::access::require_admin;
use swap_core::{normalize_catalogue_name, Caller, DomainError, Id, SwapStatus};
use tracing::{info, instrument, warn};

use crate::dto::{
    map_all, AccountResponse, CreateSkillRequest, SkillResponse, StatusResponse,
    SwapRequestResponse, UpdateSkillRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Skills ===

    #[instrument(skip(self))]
    pub async fn list_skills(&self, caller: Caller) -> ServiceResult<Vec<SkillResponse>> {
        require_admin(&caller)?;
        Ok(map_all(self.ctx.skill_repo().list_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_skill(&self, caller: Caller, id: Id) -> ServiceResult<SkillResponse> {
        require_admin(&caller)?;
        let skill = self
            .ctx
            .skill_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SkillNotFound(id))?;
        Ok(skill.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create_skill(&self, caller: Caller, request: CreateSkillRequest) -> ServiceResult<SkillResponse> {
        require_admin(&caller)?;
        let name = normalize_catalogue_name(&request.name)?;
        let skill = self.ctx.skill_repo().create(&name).await?;
        info!(skill_id = %skill.id, admin_id = %caller.id, "Skill created");
        Ok(skill.into())
    }

    /// Rename a catalogue entry; every user skill listing it follows
    #[instrument(skip(self, request))]
    pub async fn update_skill(
        &self,
        caller: Caller,
        id: Id,
        request: UpdateSkillRequest,
    ) -> ServiceResult<SkillResponse> {
        require_admin(&caller)?;
        let Some(raw) = request.name else {
            return self.get_skill(caller, id).await;
        };
        let name = normalize_catalogue_name(&raw)?;
        let skill = self.ctx.skill_repo().rename(id, &name).await?;
        info!(skill_id = %id, admin_id = %caller.id, "Skill renamed");
        Ok(skill.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_skill(&self, caller: Caller, id: Id) -> ServiceResult<()> {
        require_admin(&caller)?;
        self.ctx.skill_repo().delete(id).await?;
        warn!(skill_id = %id, admin_id = %caller.id, "Skill deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn approve_skill(&self, caller: Caller, id: Id) -> ServiceResult<StatusResponse> {
        require_admin(&caller)?;
        self.ctx.skill_repo().set_approved(id, true).await?;
        info!(skill_id = %id, "Skill approved");
        Ok(StatusResponse::new("skill approved"))
    }

    #[instrument(skip(self))]
    pub async fn reject_skill(&self, caller: Caller, id: Id) -> ServiceResult<StatusResponse> {
        require_admin(&caller)?;
        self.ctx.skill_repo().set_approved(id, false).await?;
        info!(skill_id = %id, "Skill rejected");
        Ok(StatusResponse::new("skill rejected"))
    }

    // === Users ===

    #[instrument(skip(self))]
    pub async fn list_users(&self, caller: Caller) -> ServiceResult<Vec<AccountResponse>> {
        require_admin(&caller)?;
        Ok(map_all(self.ctx.account_repo().list().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, caller: Caller, id: Id) -> ServiceResult<AccountResponse> {
        require_admin(&caller)?;
        let account = self
            .ctx
            .account_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AccountNotFound(id))?;
        Ok(account.into())
    }

    #[instrument(skip(self))]
    pub async fn ban_user(&self, caller: Caller, id: Id) -> ServiceResult<StatusResponse> {
        require_admin(&caller)?;
        if id == caller.id {
            return Err(DomainError::ValidationError("You cannot ban yourself".to_string()).into());
        }
        self.ctx.account_repo().set_active(id, false).await?;
        warn!(account_id = %id, admin_id = %caller.id, "Account banned");
        Ok(StatusResponse::new("user banned"))
    }

    #[instrument(skip(self))]
    pub async fn activate_user(&self, caller: Caller, id: Id) -> ServiceResult<StatusResponse> {
        require_admin(&caller)?;
        self.ctx.account_repo().set_active(id, true).await?;
        info!(account_id = %id, admin_id = %caller.id, "Account activated");
        Ok(StatusResponse::new("user activated"))
    }

    /// Delete an account together with everything it owns
    #[instrument(skip(self))]
    pub async fn delete_user(&self, caller: Caller, id: Id) -> ServiceResult<()> {
        require_admin(&caller)?;
        if id == caller.id {
            return Err(DomainError::ValidationError("You cannot delete yourself".to_string()).into());
        }
        self.ctx.account_repo().delete(id).await?;
        warn!(account_id = %id, admin_id = %caller.id, "Account deleted");
        Ok(())
    }

    // === Swaps (read-only) ===

    #[instrument(skip(self))]
    pub async fn list_swaps(&self, caller: Caller, status: Option<&str>) -> ServiceResult<Vec<SwapRequestResponse>> {
        require_admin(&caller)?;
        let status = status.map(str::parse::<SwapStatus>).transpose()?;
        Ok(map_all(self.ctx.swap_repo().list_all(status).await?))
    }

    #[instrument(skip(self))]
    pub async fn get_swap(&self, caller: Caller, id: Id) -> ServiceResult<SwapRequestResponse> {
        require_admin(&caller)?;
        let swap = self
            .ctx
            .swap_repo()
            .find_details(id)
            .await?
            .ok_or(DomainError::SwapRequestNotFound(id))?;
        Ok(swap.into())
    }
}
