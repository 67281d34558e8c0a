//! PostgreSQL implementation of UserSkillRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use swap_core::entities::{NewUserSkill, UserSkill};
use swap_core::error::DomainError;
use swap_core::traits::{RepoResult, UserSkillRepository};
use swap_core::value_objects::{Id, SkillType};

use crate::mappers::convert_all;
use crate::models::UserSkillModel;

use super::error::{map_db_error, map_unique_violation};

/// Base select joining the skill name; callers append WHERE/ORDER BY
pub(crate) const USER_SKILL_SELECT: &str = r"
    SELECT us.id, us.account_id, us.skill_id, s.name AS skill_name, us.skill_type,
           us.proficiency_level, us.created_at
    FROM user_skills us
    JOIN skills s ON s.id = us.skill_id
";

#[derive(Clone)]
pub struct PgUserSkillRepository {
    pool: PgPool,
}

impl PgUserSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserSkillRepository for PgUserSkillRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<UserSkill>> {
        let row = sqlx::query_as::<_, UserSkillModel>(&format!("{USER_SKILL_SELECT} WHERE us.id = $1"))
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(UserSkill::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_account(
        &self,
        account_id: Id,
        skill_type: Option<SkillType>,
    ) -> RepoResult<Vec<UserSkill>> {
        let rows = sqlx::query_as::<_, UserSkillModel>(&format!(
            r"{USER_SKILL_SELECT}
            WHERE us.account_id = $1 AND ($2::TEXT IS NULL OR us.skill_type = $2)
            ORDER BY us.created_at DESC, us.id DESC"
        ))
        .bind(account_id.into_inner())
        .bind(skill_type.map(SkillType::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn create(&self, user_skill: &NewUserSkill) -> RepoResult<UserSkill> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO user_skills (account_id, skill_id, skill_type, proficiency_level)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(user_skill.account_id.into_inner())
        .bind(user_skill.skill_id.into_inner())
        .bind(user_skill.skill_type.as_str())
        .bind(user_skill.proficiency.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateUserSkill(user_skill.skill_type)))?;

        self.find_by_id(Id::new(id))
            .await?
            .ok_or(DomainError::UserSkillNotFound(Id::new(id)))
    }

    #[instrument(skip(self))]
    async fn update(&self, user_skill: &UserSkill) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_skills
            SET skill_type = $2, proficiency_level = $3
            WHERE id = $1
            ",
        )
        .bind(user_skill.id.into_inner())
        .bind(user_skill.skill_type.as_str())
        .bind(user_skill.proficiency.value())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateUserSkill(user_skill.skill_type)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserSkillNotFound(user_skill.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM user_skills WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserSkillNotFound(id));
        }

        Ok(())
    }
}
