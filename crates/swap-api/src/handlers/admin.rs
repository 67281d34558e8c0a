//! Administration handlers
//!
//! The admin check happens in [`AdminService`] and [`ExportService`], so every
//! handler here still goes through the regular [`AuthUser`] extractor first.

use axum::{extract::State, Json};
use swap_service::dto::{
    AccountResponse, CreateSkillRequest, ExportQuery, SkillResponse, StatusFilterQuery,
    StatusResponse, SwapRequestResponse, UpdateSkillRequest,
};
use swap_service::services::{AdminService, ExportService};

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, CsvAttachment, NoContent};
use crate::state::AppState;

// ============================================================================
// Skills
// ============================================================================

/// GET /admin/skills
pub async fn list_skills(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SkillResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_skills(auth.caller).await?))
}

/// GET /admin/skills/{id}
pub async fn get_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<SkillResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.get_skill(auth.caller, id).await?))
}

/// POST /admin/skills
pub async fn create_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSkillRequest>,
) -> ApiResult<Created<Json<SkillResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.create_skill(auth.caller, request).await?;
    Ok(Created(Json(response)))
}

/// PUT|PATCH /admin/skills/{id}
pub async fn update_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateSkillRequest>,
) -> ApiResult<Json<SkillResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.update_skill(auth.caller, id, request).await?))
}

/// DELETE /admin/skills/{id}
pub async fn delete_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_skill(auth.caller, id).await?;
    Ok(NoContent)
}

/// POST /admin/skills/{id}/approve
pub async fn approve_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<StatusResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.approve_skill(auth.caller, id).await?))
}

/// POST /admin/skills/{id}/reject
pub async fn reject_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<StatusResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.reject_skill(auth.caller, id).await?))
}

// ============================================================================
// Users
// ============================================================================

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_users(auth.caller).await?))
}

/// GET /admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<AccountResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.get_user(auth.caller, id).await?))
}

/// POST /admin/users/{id}/ban
pub async fn ban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<StatusResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.ban_user(auth.caller, id).await?))
}

/// POST /admin/users/{id}/activate
pub async fn activate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<StatusResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.activate_user(auth.caller, id).await?))
}

/// DELETE /admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_user(auth.caller, id).await?;
    Ok(NoContent)
}

// ============================================================================
// Swaps (read-only)
// ============================================================================

/// GET /admin/swaps?status=
pub async fn list_swaps(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<StatusFilterQuery>,
) -> ApiResult<Json<Vec<SwapRequestResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_swaps(auth.caller, query.status.as_deref()).await?))
}

/// GET /admin/swaps/{id}
pub async fn get_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<SwapRequestResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.get_swap(auth.caller, id).await?))
}

// ============================================================================
// Export
// ============================================================================

/// GET /admin/export?type=users|swaps|feedback
pub async fn export_csv(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<ExportQuery>,
) -> ApiResult<CsvAttachment> {
    let service = ExportService::new(state.service_context());
    let export = service.export(auth.caller, query.kind.as_deref()).await?;
    Ok(CsvAttachment(export))
}
