//! Swap request service
//!
//! Proposals, the status workflow and withdrawal. Reads go through a
//! participant-scoped query, so outsiders get not-found; writes load the
//! request directly and let the capability checks reject outsiders.

use swap_core::entities::{NewSwapRequest, SwapRequest, SwapRequestDetails, UserSkill};
use swap_core::traits::{SwapQuery, SwapRole};
use swap_core::{Caller, DomainError, Id, SwapStatus};
use tracing::{info, instrument};

use crate::dto::{map_all, CreateSwapRequest, SwapListQuery, SwapRequestResponse, UpdateSwapStatusRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SwapService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SwapService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Swaps the caller takes part in, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, caller: Caller, query: SwapListQuery) -> ServiceResult<Vec<SwapRequestResponse>> {
        let query = SwapQuery {
            role: query.role.as_deref().map(str::parse::<SwapRole>).transpose()?.unwrap_or_default(),
            status: query.status.as_deref().map(str::parse::<SwapStatus>).transpose()?,
        };
        let swaps = self.ctx.swap_repo().list_for_account(caller.id, query).await?;
        Ok(map_all(swaps))
    }

    /// Propose a swap with the caller as requester
    #[instrument(skip(self, request), fields(recipient = %request.recipient))]
    pub async fn create(&self, caller: Caller, request: CreateSwapRequest) -> ServiceResult<SwapRequestResponse> {
        self.ctx
            .account_repo()
            .find_by_id(request.recipient)
            .await?
            .ok_or_else(|| DomainError::invalid("recipient", "Invalid pk - object does not exist."))?;
        let requester_skill = self.referenced_skill(request.requester_skill, "requester_skill").await?;
        let recipient_skill = self.referenced_skill(request.recipient_skill, "recipient_skill").await?;

        let proposal = NewSwapRequest::propose(
            &caller,
            request.recipient,
            &requester_skill,
            &recipient_skill,
            request.message,
        )?;
        let created = self.ctx.swap_repo().create(&proposal).await?;

        info!(swap_id = %created.id, "Swap request created");

        self.details(created.id).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, caller: Caller, id: Id) -> ServiceResult<SwapRequestResponse> {
        Ok(self.participant_view(caller, id).await?.into())
    }

    /// Drive the status workflow
    #[instrument(skip(self, request), fields(target = %request.status))]
    pub async fn update_status(
        &self,
        caller: Caller,
        id: Id,
        request: UpdateSwapStatusRequest,
    ) -> ServiceResult<SwapRequestResponse> {
        let target: SwapStatus = request.status.parse()?;
        let swap = self.existing(id).await?;

        swap.authorize_transition(&caller, target)?;

        if !self.ctx.swap_repo().update_status(id, swap.status, target).await? {
            return Err(DomainError::SwapStatusChanged.into());
        }

        info!(swap_id = %id, from = %swap.status, to = %target, "Swap status changed");

        self.details(id).await
    }

    /// Withdraw a pending request
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Id) -> ServiceResult<()> {
        let swap = self.existing(id).await?;

        swap.authorize_deletion(&caller)?;

        if !self.ctx.swap_repo().delete_pending(id).await? {
            return Err(DomainError::SwapStatusChanged.into());
        }

        info!(swap_id = %id, "Swap request deleted");
        Ok(())
    }

    async fn participant_view(&self, caller: Caller, id: Id) -> ServiceResult<SwapRequestDetails> {
        Ok(self
            .ctx
            .swap_repo()
            .find_for_participant(id, caller.id)
            .await?
            .ok_or(DomainError::SwapRequestNotFound(id))?)
    }

    async fn existing(&self, id: Id) -> ServiceResult<SwapRequest> {
        Ok(self
            .ctx
            .swap_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SwapRequestNotFound(id))?)
    }

    async fn details(&self, id: Id) -> ServiceResult<SwapRequestResponse> {
        let details = self
            .ctx
            .swap_repo()
            .find_details(id)
            .await?
            .ok_or(DomainError::SwapRequestNotFound(id))?;
        Ok(details.into())
    }

    async fn referenced_skill(&self, id: Id, field: &'static str) -> ServiceResult<UserSkill> {
        Ok(self
            .ctx
            .user_skill_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::invalid(field, "Invalid pk - object does not exist."))?)
    }
}
