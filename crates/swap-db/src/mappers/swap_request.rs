//! Swap request and feedback model -> entity mappers

use swap_core::entities::{Feedback, FeedbackDetails, SwapRequest, SwapRequestDetails};
use swap_core::error::DomainError;
use swap_core::value_objects::{Id, Rating};

use super::skill::corrupt_row;
use crate::models::{FeedbackDetailsModel, FeedbackModel, SwapRequestDetailsModel, SwapRequestModel};

impl TryFrom<SwapRequestModel> for SwapRequest {
    type Error = DomainError;

    fn try_from(model: SwapRequestModel) -> Result<Self, Self::Error> {
        Ok(SwapRequest {
            id: Id::new(model.id),
            requester_id: Id::new(model.requester_id),
            recipient_id: Id::new(model.recipient_id),
            requester_skill_id: model.requester_skill_id.map(Id::new),
            recipient_skill_id: model.recipient_skill_id.map(Id::new),
            status: model.status.parse().map_err(corrupt_row)?,
            message: model.message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<SwapRequestDetailsModel> for SwapRequestDetails {
    type Error = DomainError;

    fn try_from(model: SwapRequestDetailsModel) -> Result<Self, Self::Error> {
        Ok(SwapRequestDetails {
            request: SwapRequest::try_from(model.request)?,
            requester_username: model.requester_username,
            recipient_username: model.recipient_username,
            requester_skill_name: model.requester_skill_name,
            recipient_skill_name: model.recipient_skill_name,
        })
    }
}

impl TryFrom<FeedbackModel> for Feedback {
    type Error = DomainError;

    fn try_from(model: FeedbackModel) -> Result<Self, Self::Error> {
        Ok(Feedback {
            id: Id::new(model.id),
            swap_request_id: Id::new(model.swap_request_id),
            from_account_id: Id::new(model.from_account_id),
            to_account_id: Id::new(model.to_account_id),
            rating: Rating::new(model.rating).map_err(corrupt_row)?,
            comment: model.comment,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<FeedbackDetailsModel> for FeedbackDetails {
    type Error = DomainError;

    fn try_from(model: FeedbackDetailsModel) -> Result<Self, Self::Error> {
        Ok(FeedbackDetails {
            feedback: Feedback::try_from(model.feedback)?,
            from_username: model.from_username,
            to_username: model.to_username,
        })
    }
}

/// Convert a batch of rows, failing on the first corrupt one
pub fn convert_all<M, E>(rows: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}
