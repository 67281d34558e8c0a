//! Feedback handlers

use axum::{extract::State, Json};
use swap_service::dto::{CreateFeedbackRequest, FeedbackResponse};
use swap_service::services::FeedbackService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Rate the other participant of a completed swap
///
/// POST /feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFeedbackRequest>,
) -> ApiResult<Created<Json<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let response = service.create(auth.caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /feedback/received
pub async fn received_feedback(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    Ok(Json(service.received(auth.caller).await?))
}
