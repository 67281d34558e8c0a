//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use swap_core::entities::{
    Account, FeedbackDetails, Profile, PublicProfile, Skill, SwapRequestDetails, UserSkill,
};

use super::responses::{
    AccountResponse, FeedbackResponse, ProfileResponse, PublicProfileResponse, SkillResponse,
    SwapRequestResponse, UserSkillInfoResponse, UserSkillResponse,
};

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            is_active: account.is_active,
            is_admin: account.is_admin,
            date_joined: account.date_joined,
            last_login: account.last_login,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self::from(&account)
    }
}

impl ProfileResponse {
    pub fn new(account: &Account, profile: Profile) -> Self {
        Self {
            id: profile.id,
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            location: profile.location,
            profile_photo: profile.profile_photo,
            availability: profile.availability,
            is_public: profile.is_public,
            is_admin: account.is_admin,
        }
    }
}

impl From<PublicProfile> for PublicProfileResponse {
    fn from(profile: PublicProfile) -> Self {
        Self {
            id: profile.account_id,
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            profile_photo: profile.profile_photo,
            location: profile.location,
            availability: profile.availability,
            user_skills: profile.skills.into_iter().map(UserSkillInfoResponse::from).collect(),
        }
    }
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
            is_approved: skill.is_approved,
            created_at: skill.created_at,
        }
    }
}

impl From<UserSkill> for UserSkillResponse {
    fn from(skill: UserSkill) -> Self {
        Self {
            id: skill.id,
            skill: skill.skill_id,
            skill_name: skill.skill_name,
            skill_type: skill.skill_type,
            proficiency_level: skill.proficiency,
            created_at: skill.created_at,
        }
    }
}

impl From<UserSkill> for UserSkillInfoResponse {
    fn from(skill: UserSkill) -> Self {
        Self {
            id: skill.id,
            skill_name: skill.skill_name,
            skill_type: skill.skill_type,
            proficiency_level: skill.proficiency,
        }
    }
}

impl From<SwapRequestDetails> for SwapRequestResponse {
    fn from(details: SwapRequestDetails) -> Self {
        let request = details.request;
        Self {
            id: request.id,
            requester: request.requester_id,
            recipient: request.recipient_id,
            requester_username: details.requester_username,
            recipient_username: details.recipient_username,
            requester_skill: request.requester_skill_id,
            recipient_skill: request.recipient_skill_id,
            requester_skill_name: details.requester_skill_name,
            recipient_skill_name: details.recipient_skill_name,
            status: request.status,
            message: request.message,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

impl From<FeedbackDetails> for FeedbackResponse {
    fn from(details: FeedbackDetails) -> Self {
        let feedback = details.feedback;
        Self {
            id: feedback.id,
            swap_request: feedback.swap_request_id,
            from_user: feedback.from_account_id,
            to_user: feedback.to_account_id,
            from_username: details.from_username,
            to_username: details.to_username,
            rating: feedback.rating,
            comment: feedback.comment,
            created_at: feedback.created_at,
        }
    }
}

/// Convert a list of entities with the `From` impls above
pub fn map_all<E, D: From<E>>(items: Vec<E>) -> Vec<D> {
    items.into_iter().map(D::from).collect()
}
