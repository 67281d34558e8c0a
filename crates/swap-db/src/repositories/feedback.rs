//! PostgreSQL implementation of FeedbackRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use swap_core::entities::{Feedback, FeedbackDetails, NewFeedback};
use swap_core::error::DomainError;
use swap_core::traits::{FeedbackRepository, RepoResult};
use swap_core::value_objects::Id;

use crate::mappers::convert_all;
use crate::models::{FeedbackDetailsModel, FeedbackModel};

use super::error::{map_db_error, map_unique_violation};

const FEEDBACK_DETAILS_SELECT: &str = r"
    SELECT f.id, f.swap_request_id, f.from_account_id, f.to_account_id, f.rating, f.comment,
           f.created_at,
           fa.username AS from_username,
           ta.username AS to_username
    FROM feedback f
    JOIN accounts fa ON fa.id = f.from_account_id
    JOIN accounts ta ON ta.id = f.to_account_id
";

#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self, feedback), fields(swap_request_id = %feedback.swap_request_id))]
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback> {
        let row = sqlx::query_as::<_, FeedbackModel>(
            r"
            INSERT INTO feedback (swap_request_id, from_account_id, to_account_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, swap_request_id, from_account_id, to_account_id, rating, comment, created_at
            ",
        )
        .bind(feedback.swap_request_id.into_inner())
        .bind(feedback.from_account_id.into_inner())
        .bind(feedback.to_account_id.into_inner())
        .bind(feedback.rating.value())
        .bind(&feedback.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateFeedback))?;

        Feedback::try_from(row)
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: Id) -> RepoResult<Option<FeedbackDetails>> {
        let row = sqlx::query_as::<_, FeedbackDetailsModel>(&format!("{FEEDBACK_DETAILS_SELECT} WHERE f.id = $1"))
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(FeedbackDetails::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_received(&self, account_id: Id) -> RepoResult<Vec<FeedbackDetails>> {
        let rows = sqlx::query_as::<_, FeedbackDetailsModel>(&format!(
            "{FEEDBACK_DETAILS_SELECT} WHERE f.to_account_id = $1 ORDER BY f.created_at DESC, f.id DESC"
        ))
        .bind(account_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<FeedbackDetails>> {
        let rows = sqlx::query_as::<_, FeedbackDetailsModel>(&format!("{FEEDBACK_DETAILS_SELECT} ORDER BY f.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        convert_all(rows)
    }
}
