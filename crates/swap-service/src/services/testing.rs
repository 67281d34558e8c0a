//! In-memory repository fakes for service tests
//!
//! One store implements every repository port so joined projections
//! (usernames, skill names) can be answered. Uniqueness rules mirror the
//! database constraints.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use swap_common::auth::JwtService;
use swap_core::entities::{
    Account, Feedback, FeedbackDetails, NewAccount, NewFeedback, NewSwapRequest, NewUserSkill,
    Profile, PublicProfile, Skill, SwapRequest, SwapRequestDetails, UserSkill,
};
use swap_core::error::DomainError;
use swap_core::traits::{
    AccountRepository, FeedbackRepository, ProfileRepository, RepoResult, SkillRepository,
    SwapQuery, SwapRequestRepository, SwapRole, UserSkillRepository,
};
use swap_core::value_objects::{Id, SkillType, SwapStatus};
use swap_core::Caller;

use super::context::ServiceContext;

pub const TEST_PASSWORD: &str = "Sup3rsecret";

#[derive(Default)]
struct State {
    next_id: i64,
    accounts: Vec<(Account, String)>,
    profiles: Vec<Profile>,
    skills: Vec<Skill>,
    user_skills: Vec<UserSkill>,
    swaps: Vec<SwapRequest>,
    feedback: Vec<Feedback>,
}

impl State {
    fn next_id(&mut self) -> Id {
        self.next_id += 1;
        Id::new(self.next_id)
    }

    fn username(&self, id: Id) -> String {
        self.accounts
            .iter()
            .find(|(a, _)| a.id == id)
            .map(|(a, _)| a.username.clone())
            .unwrap_or_default()
    }

    fn skill_name(&self, user_skill: Option<Id>) -> Option<String> {
        let id = user_skill?;
        self.user_skills.iter().find(|s| s.id == id).map(|s| s.skill_name.clone())
    }

    fn swap_details(&self, swap: &SwapRequest) -> SwapRequestDetails {
        SwapRequestDetails {
            request: swap.clone(),
            requester_username: self.username(swap.requester_id),
            recipient_username: self.username(swap.recipient_id),
            requester_skill_name: self.skill_name(swap.requester_skill_id),
            recipient_skill_name: self.skill_name(swap.recipient_skill_id),
        }
    }

    fn feedback_details(&self, feedback: &Feedback) -> FeedbackDetails {
        FeedbackDetails {
            feedback: feedback.clone(),
            from_username: self.username(feedback.from_account_id),
            to_username: self.username(feedback.to_account_id),
        }
    }

    /// Remove matching user skills and null swap references to them
    fn drop_user_skills(&mut self, doomed: impl Fn(&UserSkill) -> bool) {
        let removed: Vec<Id> = self.user_skills.iter().filter(|s| doomed(s)).map(|s| s.id).collect();
        self.user_skills.retain(|s| !removed.contains(&s.id));
        for swap in &mut self.swaps {
            if swap.requester_skill_id.is_some_and(|id| removed.contains(&id)) {
                swap.requester_skill_id = None;
            }
            if swap.recipient_skill_id.is_some_and(|id| removed.contains(&id)) {
                swap.recipient_skill_id = None;
            }
        }
    }

    fn name_taken(&self, name: &str, except: Option<Id>) -> bool {
        self.skills.iter().any(|s| Some(s.id) != except && s.name == name)
    }

    fn triple_taken(&self, account_id: Id, skill_id: Id, skill_type: SkillType, except: Option<Id>) -> bool {
        self.user_skills.iter().any(|s| {
            Some(s.id) != except
                && s.account_id == account_id
                && s.skill_id == skill_id
                && s.skill_type == skill_type
        })
    }
}

/// Shared in-memory store
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert an account with profile directly, bypassing registration
    pub fn add_account(&self, username: &str, is_admin: bool) -> Caller {
        let mut state = self.state.lock();
        let id = state.next_id();
        let profile_id = state.next_id();
        let now = Utc::now();
        let account = Account {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
            is_admin,
            date_joined: now,
            last_login: None,
        };
        let hash = swap_common::hash_password(TEST_PASSWORD).expect("hash");
        state.accounts.push((account, hash));
        state.profiles.push(Profile {
            id: profile_id,
            account_id: id,
            location: None,
            profile_photo: None,
            availability: None,
            is_public: true,
            created_at: now,
            updated_at: now,
        });
        Caller::new(id, is_admin)
    }

    pub fn set_public(&self, account_id: Id, is_public: bool) {
        let mut state = self.state.lock();
        if let Some(p) = state.profiles.iter_mut().find(|p| p.account_id == account_id) {
            p.is_public = is_public;
        }
    }

    /// Force a swap into a status without going through the workflow
    pub fn force_status(&self, swap_id: Id, status: SwapStatus) {
        let mut state = self.state.lock();
        if let Some(s) = state.swaps.iter_mut().find(|s| s.id == swap_id) {
            s.status = status;
        }
    }

    pub fn profile_count(&self, account_id: Id) -> usize {
        self.state.lock().profiles.iter().filter(|p| p.account_id == account_id).count()
    }

    pub fn swap_count(&self) -> usize {
        self.state.lock().swaps.len()
    }
}

/// Build a context wired entirely to `store`
pub fn context(store: &Arc<InMemoryStore>) -> ServiceContext {
    ServiceContext::builder()
        .account_repo(store.clone())
        .profile_repo(store.clone())
        .skill_repo(store.clone())
        .user_skill_repo(store.clone())
        .swap_repo(store.clone())
        .feedback_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret", 900, 3600)))
        .build()
        .expect("complete context")
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Account>> {
        Ok(self.state.lock().accounts.iter().find(|(a, _)| a.id == id).map(|(a, _)| a.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        Ok(self
            .state
            .lock()
            .accounts
            .iter()
            .find(|(a, _)| a.username == username)
            .map(|(a, _)| a.clone()))
    }

    async fn create_with_profile(&self, account: &NewAccount, password_hash: &str) -> RepoResult<(Account, Profile)> {
        let mut state = self.state.lock();
        if state.accounts.iter().any(|(a, _)| a.username == account.username) {
            return Err(DomainError::UsernameTaken);
        }
        let now = Utc::now();
        let created = Account {
            id: state.next_id(),
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            is_active: true,
            is_admin: false,
            date_joined: now,
            last_login: None,
        };
        let profile = Profile {
            id: state.next_id(),
            account_id: created.id,
            location: None,
            profile_photo: None,
            availability: None,
            is_public: true,
            created_at: now,
            updated_at: now,
        };
        state.accounts.push((created.clone(), password_hash.to_string()));
        state.profiles.push(profile.clone());
        Ok((created, profile))
    }

    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>> {
        Ok(self.state.lock().accounts.iter().find(|(a, _)| a.id == id).map(|(_, h)| h.clone()))
    }

    async fn record_login(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        if let Some((a, _)) = state.accounts.iter_mut().find(|(a, _)| a.id == id) {
            a.last_login = Some(Utc::now());
        }
        Ok(())
    }

    async fn set_active(&self, id: Id, active: bool) -> RepoResult<()> {
        let mut state = self.state.lock();
        let (account, _) = state
            .accounts
            .iter_mut()
            .find(|(a, _)| a.id == id)
            .ok_or(DomainError::AccountNotFound(id))?;
        account.is_active = active;
        Ok(())
    }

    async fn list(&self) -> RepoResult<Vec<Account>> {
        Ok(self.state.lock().accounts.iter().map(|(a, _)| a.clone()).collect())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.accounts.len();
        state.accounts.retain(|(a, _)| a.id != id);
        if state.accounts.len() == before {
            return Err(DomainError::AccountNotFound(id));
        }
        state.profiles.retain(|p| p.account_id != id);
        state.drop_user_skills(|s| s.account_id == id);
        state.swaps.retain(|s| !s.is_participant(id));
        let swap_ids: Vec<Id> = state.swaps.iter().map(|s| s.id).collect();
        state.feedback.retain(|f| {
            f.from_account_id != id && f.to_account_id != id && swap_ids.contains(&f.swap_request_id)
        });
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find_by_account(&self, account_id: Id) -> RepoResult<Option<Profile>> {
        Ok(self.state.lock().profiles.iter().find(|p| p.account_id == account_id).cloned())
    }

    async fn update_with_account(&self, account: &Account, profile: &Profile) -> RepoResult<()> {
        let mut state = self.state.lock();
        let (stored, _) = state
            .accounts
            .iter_mut()
            .find(|(a, _)| a.id == account.id)
            .ok_or(DomainError::AccountNotFound(account.id))?;
        stored.first_name = account.first_name.clone();
        stored.last_name = account.last_name.clone();
        let slot = state
            .profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or(DomainError::ProfileNotFound(account.id))?;
        *slot = profile.clone();
        Ok(())
    }

    async fn search_public(&self, query: &str) -> RepoResult<Vec<PublicProfile>> {
        let state = self.state.lock();
        let needle = query.to_lowercase();
        let mut found: Vec<PublicProfile> = state
            .accounts
            .iter()
            .map(|(a, _)| a)
            .filter(|a| {
                state.profiles.iter().any(|p| p.account_id == a.id && p.is_public)
                    && state.user_skills.iter().any(|s| {
                        s.account_id == a.id
                            && s.skill_type == SkillType::Offered
                            && s.skill_name.to_lowercase().contains(&needle)
                    })
            })
            .filter_map(|a| {
                let profile = state.profiles.iter().find(|p| p.account_id == a.id)?;
                Some(PublicProfile {
                    account_id: a.id,
                    username: a.username.clone(),
                    first_name: a.first_name.clone(),
                    last_name: a.last_name.clone(),
                    profile_photo: profile.profile_photo.clone(),
                    location: profile.location.clone(),
                    availability: profile.availability.clone(),
                    skills: state.user_skills.iter().filter(|s| s.account_id == a.id).cloned().collect(),
                })
            })
            .collect();
        found.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(found)
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Skill>> {
        Ok(self.state.lock().skills.iter().find(|s| s.id == id).cloned())
    }

    async fn get_or_create(&self, name: &str) -> RepoResult<Skill> {
        let mut state = self.state.lock();
        if let Some(skill) = state.skills.iter().find(|s| s.name == name) {
            return Ok(skill.clone());
        }
        let skill = Skill {
            id: state.next_id(),
            name: name.to_string(),
            is_approved: true,
            created_at: Utc::now(),
        };
        state.skills.push(skill.clone());
        Ok(skill)
    }

    async fn list_approved(&self, search: Option<&str>) -> RepoResult<Vec<Skill>> {
        let needle = search.map(str::to_lowercase);
        let mut skills: Vec<Skill> = self
            .state
            .lock()
            .skills
            .iter()
            .filter(|s| s.is_approved)
            .filter(|s| needle.as_deref().map_or(true, |n| s.name.contains(n)))
            .cloned()
            .collect();
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(skills)
    }

    async fn list_all(&self) -> RepoResult<Vec<Skill>> {
        Ok(self.state.lock().skills.clone())
    }

    async fn set_approved(&self, id: Id, approved: bool) -> RepoResult<()> {
        let mut state = self.state.lock();
        let skill = state
            .skills
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DomainError::SkillNotFound(id))?;
        skill.is_approved = approved;
        Ok(())
    }

    async fn create(&self, name: &str) -> RepoResult<Skill> {
        let mut state = self.state.lock();
        if state.name_taken(name, None) {
            return Err(DomainError::DuplicateSkillName);
        }
        let skill = Skill {
            id: state.next_id(),
            name: name.to_string(),
            is_approved: true,
            created_at: Utc::now(),
        };
        state.skills.push(skill.clone());
        Ok(skill)
    }

    async fn rename(&self, id: Id, name: &str) -> RepoResult<Skill> {
        let mut state = self.state.lock();
        if state.name_taken(name, Some(id)) {
            return Err(DomainError::DuplicateSkillName);
        }
        let skill = state
            .skills
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DomainError::SkillNotFound(id))?;
        skill.name = name.to_string();
        let renamed = skill.clone();
        for listed in state.user_skills.iter_mut().filter(|s| s.skill_id == id) {
            listed.skill_name = renamed.name.clone();
        }
        Ok(renamed)
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.skills.len();
        state.skills.retain(|s| s.id != id);
        if state.skills.len() == before {
            return Err(DomainError::SkillNotFound(id));
        }
        state.drop_user_skills(|s| s.skill_id == id);
        Ok(())
    }
}

#[async_trait]
impl UserSkillRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<UserSkill>> {
        Ok(self.state.lock().user_skills.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_account(&self, account_id: Id, skill_type: Option<SkillType>) -> RepoResult<Vec<UserSkill>> {
        let mut skills: Vec<UserSkill> = self
            .state
            .lock()
            .user_skills
            .iter()
            .filter(|s| s.account_id == account_id)
            .filter(|s| skill_type.map_or(true, |t| s.skill_type == t))
            .cloned()
            .collect();
        skills.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(skills)
    }

    async fn create(&self, user_skill: &NewUserSkill) -> RepoResult<UserSkill> {
        let mut state = self.state.lock();
        if state.triple_taken(user_skill.account_id, user_skill.skill_id, user_skill.skill_type, None) {
            return Err(DomainError::DuplicateUserSkill(user_skill.skill_type));
        }
        let skill_name = state
            .skills
            .iter()
            .find(|s| s.id == user_skill.skill_id)
            .map(|s| s.name.clone())
            .ok_or(DomainError::SkillNotFound(user_skill.skill_id))?;
        let created = UserSkill {
            id: state.next_id(),
            account_id: user_skill.account_id,
            skill_id: user_skill.skill_id,
            skill_name,
            skill_type: user_skill.skill_type,
            proficiency: user_skill.proficiency,
            created_at: Utc::now(),
        };
        state.user_skills.push(created.clone());
        Ok(created)
    }

    async fn update(&self, user_skill: &UserSkill) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.triple_taken(user_skill.account_id, user_skill.skill_id, user_skill.skill_type, Some(user_skill.id)) {
            return Err(DomainError::DuplicateUserSkill(user_skill.skill_type));
        }
        let slot = state
            .user_skills
            .iter_mut()
            .find(|s| s.id == user_skill.id)
            .ok_or(DomainError::UserSkillNotFound(user_skill.id))?;
        slot.skill_type = user_skill.skill_type;
        slot.proficiency = user_skill.proficiency;
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        if !state.user_skills.iter().any(|s| s.id == id) {
            return Err(DomainError::UserSkillNotFound(id));
        }
        state.drop_user_skills(|s| s.id == id);
        Ok(())
    }
}

#[async_trait]
impl SwapRequestRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<SwapRequest>> {
        Ok(self.state.lock().swaps.iter().find(|s| s.id == id).cloned())
    }

    async fn find_for_participant(&self, id: Id, account_id: Id) -> RepoResult<Option<SwapRequestDetails>> {
        let state = self.state.lock();
        Ok(state
            .swaps
            .iter()
            .find(|s| s.id == id && s.is_participant(account_id))
            .map(|s| state.swap_details(s)))
    }

    async fn find_details(&self, id: Id) -> RepoResult<Option<SwapRequestDetails>> {
        let state = self.state.lock();
        Ok(state.swaps.iter().find(|s| s.id == id).map(|s| state.swap_details(s)))
    }

    async fn list_for_account(&self, account_id: Id, query: SwapQuery) -> RepoResult<Vec<SwapRequestDetails>> {
        let state = self.state.lock();
        Ok(state
            .swaps
            .iter()
            .rev()
            .filter(|s| match query.role {
                SwapRole::Sent => s.requester_id == account_id,
                SwapRole::Received => s.recipient_id == account_id,
                SwapRole::All => s.is_participant(account_id),
            })
            .filter(|s| query.status.map_or(true, |st| s.status == st))
            .map(|s| state.swap_details(s))
            .collect())
    }

    async fn list_all(&self, status: Option<SwapStatus>) -> RepoResult<Vec<SwapRequestDetails>> {
        let state = self.state.lock();
        Ok(state
            .swaps
            .iter()
            .rev()
            .filter(|s| status.map_or(true, |st| s.status == st))
            .map(|s| state.swap_details(s))
            .collect())
    }

    async fn create(&self, request: &NewSwapRequest) -> RepoResult<SwapRequest> {
        let mut state = self.state.lock();
        let duplicate = state.swaps.iter().any(|s| {
            s.status == SwapStatus::Pending
                && s.requester_id == request.requester_id
                && s.recipient_id == request.recipient_id
                && s.requester_skill_id == Some(request.requester_skill_id)
                && s.recipient_skill_id == Some(request.recipient_skill_id)
        });
        if duplicate {
            return Err(DomainError::DuplicatePendingSwap);
        }
        let now = Utc::now();
        let swap = SwapRequest {
            id: state.next_id(),
            requester_id: request.requester_id,
            recipient_id: request.recipient_id,
            requester_skill_id: Some(request.requester_skill_id),
            recipient_skill_id: Some(request.recipient_skill_id),
            status: SwapStatus::Pending,
            message: request.message.clone(),
            created_at: now,
            updated_at: now,
        };
        state.swaps.push(swap.clone());
        Ok(swap)
    }

    async fn update_status(&self, id: Id, expected: SwapStatus, target: SwapStatus) -> RepoResult<bool> {
        let mut state = self.state.lock();
        match state.swaps.iter_mut().find(|s| s.id == id && s.status == expected) {
            Some(swap) => {
                swap.status = target;
                swap.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_pending(&self, id: Id) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let before = state.swaps.len();
        state.swaps.retain(|s| !(s.id == id && s.status == SwapStatus::Pending));
        Ok(state.swaps.len() < before)
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryStore {
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback> {
        let mut state = self.state.lock();
        let duplicate = state
            .feedback
            .iter()
            .any(|f| f.swap_request_id == feedback.swap_request_id && f.from_account_id == feedback.from_account_id);
        if duplicate {
            return Err(DomainError::DuplicateFeedback);
        }
        let created = Feedback {
            id: state.next_id(),
            swap_request_id: feedback.swap_request_id,
            from_account_id: feedback.from_account_id,
            to_account_id: feedback.to_account_id,
            rating: feedback.rating,
            comment: feedback.comment.clone(),
            created_at: Utc::now(),
        };
        state.feedback.push(created.clone());
        Ok(created)
    }

    async fn find_details(&self, id: Id) -> RepoResult<Option<FeedbackDetails>> {
        let state = self.state.lock();
        Ok(state.feedback.iter().find(|f| f.id == id).map(|f| state.feedback_details(f)))
    }

    async fn find_received(&self, account_id: Id) -> RepoResult<Vec<FeedbackDetails>> {
        let state = self.state.lock();
        Ok(state
            .feedback
            .iter()
            .rev()
            .filter(|f| f.to_account_id == account_id)
            .map(|f| state.feedback_details(f))
            .collect())
    }

    async fn list_all(&self) -> RepoResult<Vec<FeedbackDetails>> {
        let state = self.state.lock();
        Ok(state.feedback.iter().map(|f| state.feedback_details(f)).collect())
    }
}
