//! Profile service
//!
//! Reads and updates the caller's own profile, including the name fields
//! that live on the account.

use swap_core::entities::{Account, Profile, ProfileChanges};
use swap_core::{Caller, DomainError};
use tracing::{info, instrument};

use crate::dto::{ProfileResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get_profile(&self, caller: Caller) -> ServiceResult<ProfileResponse> {
        let (account, profile) = self.load(caller).await?;
        Ok(ProfileResponse::new(&account, profile))
    }

    /// Partial update; account and profile rows are written together
    #[instrument(skip(self, request))]
    pub async fn update_profile(&self, caller: Caller, request: UpdateProfileRequest) -> ServiceResult<ProfileResponse> {
        let (mut account, mut profile) = self.load(caller).await?;

        let changes = ProfileChanges {
            first_name: request.first_name.map(|s| s.trim().to_string()),
            last_name: request.last_name.map(|s| s.trim().to_string()),
            location: request.location,
            profile_photo: request.profile_photo,
            availability: request.availability,
            is_public: request.is_public,
        };
        account.rename(changes.first_name.clone(), changes.last_name.clone());
        profile.apply(&changes);

        self.ctx.profile_repo().update_with_account(&account, &profile).await?;

        info!(account_id = %account.id, is_public = profile.is_public, "Profile updated");

        Ok(ProfileResponse::new(&account, profile))
    }

    async fn load(&self, caller: Caller) -> ServiceResult<(Account, Profile)> {
        let account = self
            .ctx
            .account_repo()
            .find_by_id(caller.id)
            .await?
            .ok_or(DomainError::AccountNotFound(caller.id))?;
        let profile = self
            .ctx
            .profile_repo()
            .find_by_account(caller.id)
            .await?
            .ok_or(DomainError::ProfileNotFound(caller.id))?;
        Ok((account, profile))
    }
}
