//! Feedback service

use swap_core::entities::NewFeedback;
use swap_core::{Caller, DomainError, Rating};
use tracing::{info, instrument};

use crate::dto::{map_all, CreateFeedbackRequest, FeedbackResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rate the other participant of a completed swap.
    ///
    /// Order of checks: swap exists, swap completed, caller participates,
    /// then the one-per-participant constraint on insert.
    #[instrument(skip(self, request), fields(swap_request = %request.swap_request))]
    pub async fn create(&self, caller: Caller, request: CreateFeedbackRequest) -> ServiceResult<FeedbackResponse> {
        let rating = Rating::new(request.rating)?;
        let swap = self
            .ctx
            .swap_repo()
            .find_by_id(request.swap_request)
            .await?
            .ok_or_else(|| DomainError::invalid("swap_request", "Invalid pk - object does not exist."))?;

        let to_account_id = swap.feedback_target(&caller)?;

        let created = self
            .ctx
            .feedback_repo()
            .create(&NewFeedback {
                swap_request_id: swap.id,
                from_account_id: caller.id,
                to_account_id,
                rating,
                comment: request.comment.trim().to_string(),
            })
            .await?;

        info!(feedback_id = %created.id, rating = rating.value(), "Feedback left");

        let details = self
            .ctx
            .feedback_repo()
            .find_details(created.id)
            .await?
            .ok_or_else(|| DomainError::InternalError(format!("feedback {} vanished after insert", created.id)))?;
        Ok(details.into())
    }

    /// Feedback addressed to the caller, newest first
    #[instrument(skip(self))]
    pub async fn received(&self, caller: Caller) -> ServiceResult<Vec<FeedbackResponse>> {
        let feedback = self.ctx.feedback_repo().find_received(caller.id).await?;
        Ok(map_all(feedback))
    }
}
