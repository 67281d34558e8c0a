//! PostgreSQL implementation of SkillRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use swap_core::entities::Skill;
use swap_core::error::DomainError;
use swap_core::traits::{RepoResult, SkillRepository};
use swap_core::value_objects::Id;

use crate::models::SkillModel;

use super::error::{map_db_error, map_unique_violation};
use super::pattern::contains_pattern;

#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Skill>> {
        let result = sqlx::query_as::<_, SkillModel>(
            "SELECT id, name, is_approved, created_at FROM skills WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Skill::from))
    }

    #[instrument(skip(self))]
    async fn get_or_create(&self, name: &str) -> RepoResult<Skill> {
        // The no-op update makes RETURNING yield the existing row on conflict
        let row = sqlx::query_as::<_, SkillModel>(
            r"
            INSERT INTO skills (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, is_approved, created_at
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Skill::from(row))
    }

    #[instrument(skip(self))]
    async fn list_approved(&self, search: Option<&str>) -> RepoResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, is_approved, created_at
            FROM skills
            WHERE is_approved = TRUE AND ($1::TEXT IS NULL OR name ILIKE $1)
            ORDER BY name
            ",
        )
        .bind(search.map(contains_pattern))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, SkillModel>(
            "SELECT id, name, is_approved, created_at FROM skills ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_approved(&self, id: Id, approved: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE skills SET is_approved = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(approved)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SkillNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<Skill> {
        let row = sqlx::query_as::<_, SkillModel>(
            "INSERT INTO skills (name) VALUES ($1) RETURNING id, name, is_approved, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSkillName))?;

        Ok(Skill::from(row))
    }

    #[instrument(skip(self))]
    async fn rename(&self, id: Id, name: &str) -> RepoResult<Skill> {
        let row = sqlx::query_as::<_, SkillModel>(
            "UPDATE skills SET name = $2 WHERE id = $1 RETURNING id, name, is_approved, created_at",
        )
        .bind(id.into_inner())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSkillName))?;

        row.map(Skill::from).ok_or(DomainError::SkillNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // user_skills cascade; swap references to them fall back to NULL
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SkillNotFound(id));
        }

        Ok(())
    }
}
