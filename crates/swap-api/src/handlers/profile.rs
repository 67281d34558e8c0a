//! Profile handlers

use axum::{extract::State, Json};
use swap_service::dto::{ProfileResponse, UpdateProfileRequest};
use swap_service::services::ProfileService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.get_profile(auth.caller).await?))
}

/// PUT|PATCH /profile
///
/// Only the fields present in the body are changed.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.update_profile(auth.caller, request).await?))
}
