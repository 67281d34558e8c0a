//! Account and profile model -> entity mappers

use swap_core::entities::{Account, Profile, PublicProfile, UserSkill};
use swap_core::value_objects::Id;

use crate::models::{AccountModel, ProfileModel, PublicProfileModel};

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: Id::new(model.id),
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            is_active: model.is_active,
            is_admin: model.is_admin,
            date_joined: model.date_joined,
            last_login: model.last_login,
        }
    }
}

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Id::new(model.id),
            account_id: Id::new(model.account_id),
            location: model.location,
            profile_photo: model.profile_photo,
            availability: model.availability,
            is_public: model.is_public,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Attach the account's skills to a search row
pub fn public_profile(model: PublicProfileModel, skills: Vec<UserSkill>) -> PublicProfile {
    PublicProfile {
        account_id: Id::new(model.account_id),
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
        profile_photo: model.profile_photo,
        location: model.location,
        availability: model.availability,
        skills,
    }
}
