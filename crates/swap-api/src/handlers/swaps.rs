//! Swap request handlers
//!
//! The detail view is participant-scoped and answers 404 to anyone else.
//! Status changes and withdrawal answer 403 to non-participants.

use axum::{extract::State, Json};
use swap_service::dto::{
    CreateSwapRequest, SwapListQuery, SwapRequestResponse, UpdateSwapStatusRequest,
};
use swap_service::services::SwapService;

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /swaps?status=&role=sent|received|all
pub async fn list_swaps(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<SwapListQuery>,
) -> ApiResult<Json<Vec<SwapRequestResponse>>> {
    let service = SwapService::new(state.service_context());
    Ok(Json(service.list(auth.caller, query).await?))
}

/// POST /swaps
pub async fn create_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSwapRequest>,
) -> ApiResult<Created<Json<SwapRequestResponse>>> {
    let service = SwapService::new(state.service_context());
    let response = service.create(auth.caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /swaps/{id}
pub async fn get_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<SwapRequestResponse>> {
    let service = SwapService::new(state.service_context());
    Ok(Json(service.get(auth.caller, id).await?))
}

/// PUT|PATCH /swaps/{id}
pub async fn update_swap_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateSwapStatusRequest>,
) -> ApiResult<Json<SwapRequestResponse>> {
    let service = SwapService::new(state.service_context());
    Ok(Json(service.update_status(auth.caller, id, request).await?))
}

/// DELETE /swaps/{id}
pub async fn delete_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = SwapService::new(state.service_context());
    service.delete(auth.caller, id).await?;
    Ok(NoContent)
}
