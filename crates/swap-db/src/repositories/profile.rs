//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::instrument;

use swap_core::entities::{Account, Profile, PublicProfile, UserSkill};
use swap_core::error::DomainError;
use swap_core::traits::{ProfileRepository, RepoResult};
use swap_core::value_objects::Id;

use crate::mappers::{convert_all, public_profile};
use crate::models::{ProfileModel, PublicProfileModel, UserSkillModel};

use super::error::map_db_error;
use super::pattern::contains_pattern;
use super::user_skill::USER_SKILL_SELECT;

#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_account(&self, account_id: Id) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, account_id, location, profile_photo, availability, is_public,
                   created_at, updated_at
            FROM profiles
            WHERE account_id = $1
            ",
        )
        .bind(account_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, account, profile), fields(account_id = %account.id))]
    async fn update_with_account(&self, account: &Account, profile: &Profile) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("UPDATE accounts SET first_name = $2, last_name = $3 WHERE id = $1")
            .bind(account.id.into_inner())
            .bind(&account.first_name)
            .bind(&account.last_name)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AccountNotFound(account.id));
        }

        let result = sqlx::query(
            r"
            UPDATE profiles
            SET location = $2, profile_photo = $3, availability = $4, is_public = $5,
                updated_at = NOW()
            WHERE account_id = $1
            ",
        )
        .bind(account.id.into_inner())
        .bind(&profile.location)
        .bind(&profile.profile_photo)
        .bind(&profile.availability)
        .bind(profile.is_public)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProfileNotFound(account.id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_public(&self, query: &str) -> RepoResult<Vec<PublicProfile>> {
        let rows = sqlx::query_as::<_, PublicProfileModel>(
            r"
            SELECT a.id AS account_id, a.username, a.first_name, a.last_name,
                   p.profile_photo, p.location, p.availability
            FROM accounts a
            JOIN profiles p ON p.account_id = a.id
            WHERE p.is_public = TRUE
              AND EXISTS (
                  SELECT 1
                  FROM user_skills us
                  JOIN skills s ON s.id = us.skill_id
                  WHERE us.account_id = a.id
                    AND us.skill_type = 'offered'
                    AND s.name ILIKE $1
              )
            ORDER BY a.username
            ",
        )
        .bind(contains_pattern(query))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let account_ids: Vec<i64> = rows.iter().map(|r| r.account_id).collect();
        let skill_rows = sqlx::query_as::<_, UserSkillModel>(&format!(
            "{USER_SKILL_SELECT} WHERE us.account_id = ANY($1) ORDER BY us.id"
        ))
        .bind(&account_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut skills_by_account: HashMap<Id, Vec<UserSkill>> = HashMap::new();
        for skill in convert_all::<_, UserSkill>(skill_rows)? {
            skills_by_account.entry(skill.account_id).or_default().push(skill);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let skills = skills_by_account
                    .remove(&Id::new(row.account_id))
                    .unwrap_or_default();
                public_profile(row, skills)
            })
            .collect())
    }
}
