//! PostgreSQL implementation of SwapRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use swap_core::entities::{NewSwapRequest, SwapRequest, SwapRequestDetails};
use swap_core::error::DomainError;
use swap_core::traits::{RepoResult, SwapQuery, SwapRequestRepository, SwapRole};
use swap_core::value_objects::{Id, SwapStatus};

use crate::mappers::convert_all;
use crate::models::{SwapRequestDetailsModel, SwapRequestModel};

use super::error::{map_db_error, map_unique_violation};

const SWAP_COLUMNS: &str = "id, requester_id, recipient_id, requester_skill_id, recipient_skill_id, \
                            status, message, created_at, updated_at";

/// Skill names are left-joined: the referenced user skill may be gone
const SWAP_DETAILS_SELECT: &str = r"
    SELECT sr.id, sr.requester_id, sr.recipient_id, sr.requester_skill_id, sr.recipient_skill_id,
           sr.status, sr.message, sr.created_at, sr.updated_at,
           req.username AS requester_username,
           rec.username AS recipient_username,
           req_skill.name AS requester_skill_name,
           rec_skill.name AS recipient_skill_name
    FROM swap_requests sr
    JOIN accounts req ON req.id = sr.requester_id
    JOIN accounts rec ON rec.id = sr.recipient_id
    LEFT JOIN user_skills req_us ON req_us.id = sr.requester_skill_id
    LEFT JOIN skills req_skill ON req_skill.id = req_us.skill_id
    LEFT JOIN user_skills rec_us ON rec_us.id = sr.recipient_skill_id
    LEFT JOIN skills rec_skill ON rec_skill.id = rec_us.skill_id
";

const NEWEST_FIRST: &str = "ORDER BY sr.created_at DESC, sr.id DESC";

fn role_clause(role: SwapRole) -> &'static str {
    match role {
        SwapRole::Sent => "sr.requester_id = $1",
        SwapRole::Received => "sr.recipient_id = $1",
        SwapRole::All => "(sr.requester_id = $1 OR sr.recipient_id = $1)",
    }
}

#[derive(Clone)]
pub struct PgSwapRequestRepository {
    pool: PgPool,
}

impl PgSwapRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SwapRequestRepository for PgSwapRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<SwapRequest>> {
        let row = sqlx::query_as::<_, SwapRequestModel>(&format!(
            "SELECT {SWAP_COLUMNS} FROM swap_requests WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(SwapRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_for_participant(&self, id: Id, account_id: Id) -> RepoResult<Option<SwapRequestDetails>> {
        let row = sqlx::query_as::<_, SwapRequestDetailsModel>(&format!(
            "{SWAP_DETAILS_SELECT} WHERE sr.id = $2 AND {}",
            role_clause(SwapRole::All)
        ))
        .bind(account_id.into_inner())
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(SwapRequestDetails::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: Id) -> RepoResult<Option<SwapRequestDetails>> {
        let row = sqlx::query_as::<_, SwapRequestDetailsModel>(&format!("{SWAP_DETAILS_SELECT} WHERE sr.id = $1"))
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(SwapRequestDetails::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_for_account(&self, account_id: Id, query: SwapQuery) -> RepoResult<Vec<SwapRequestDetails>> {
        let rows = sqlx::query_as::<_, SwapRequestDetailsModel>(&format!(
            "{SWAP_DETAILS_SELECT} WHERE {} AND ($2::TEXT IS NULL OR sr.status = $2) {NEWEST_FIRST}",
            role_clause(query.role)
        ))
        .bind(account_id.into_inner())
        .bind(query.status.map(SwapStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn list_all(&self, status: Option<SwapStatus>) -> RepoResult<Vec<SwapRequestDetails>> {
        let rows = sqlx::query_as::<_, SwapRequestDetailsModel>(&format!(
            "{SWAP_DETAILS_SELECT} WHERE ($1::TEXT IS NULL OR sr.status = $1) {NEWEST_FIRST}"
        ))
        .bind(status.map(SwapStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn create(&self, request: &NewSwapRequest) -> RepoResult<SwapRequest> {
        let row = sqlx::query_as::<_, SwapRequestModel>(&format!(
            r"
            INSERT INTO swap_requests (requester_id, recipient_id, requester_skill_id, recipient_skill_id, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SWAP_COLUMNS}
            "
        ))
        .bind(request.requester_id.into_inner())
        .bind(request.recipient_id.into_inner())
        .bind(request.requester_skill_id.into_inner())
        .bind(request.recipient_skill_id.into_inner())
        .bind(&request.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicatePendingSwap))?;

        SwapRequest::try_from(row)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Id, expected: SwapStatus, target: SwapStatus) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE swap_requests
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            ",
        )
        .bind(id.into_inner())
        .bind(expected.as_str())
        .bind(target.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn delete_pending(&self, id: Id) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM swap_requests WHERE id = $1 AND status = 'pending'")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
