//! Service context - dependency container for services
//!
//! Holds the repository ports and the token service.

use std::sync::Arc;

use swap_common::auth::JwtService;
use swap_core::traits::{
    AccountRepository, FeedbackRepository, ProfileRepository, SkillRepository,
    SwapRequestRepository, UserSkillRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    account_repo: Arc<dyn AccountRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    user_skill_repo: Arc<dyn UserSkillRepository>,
    swap_repo: Arc<dyn SwapRequestRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    pub fn user_skill_repo(&self) -> &dyn UserSkillRepository {
        self.user_skill_repo.as_ref()
    }

    pub fn swap_repo(&self) -> &dyn SwapRequestRepository {
        self.swap_repo.as_ref()
    }

    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    skill_repo: Option<Arc<dyn SkillRepository>>,
    user_skill_repo: Option<Arc<dyn UserSkillRepository>>,
    swap_repo: Option<Arc<dyn SwapRequestRepository>>,
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn skill_repo(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skill_repo = Some(repo);
        self
    }

    pub fn user_skill_repo(mut self, repo: Arc<dyn UserSkillRepository>) -> Self {
        self.user_skill_repo = Some(repo);
        self
    }

    pub fn swap_repo(mut self, repo: Arc<dyn SwapRequestRepository>) -> Self {
        self.swap_repo = Some(repo);
        self
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            account_repo: required(self.account_repo, "account_repo")?,
            profile_repo: required(self.profile_repo, "profile_repo")?,
            skill_repo: required(self.skill_repo, "skill_repo")?,
            user_skill_repo: required(self.user_skill_repo, "user_skill_repo")?,
            swap_repo: required(self.swap_repo, "swap_repo")?,
            feedback_repo: required(self.feedback_repo, "feedback_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
