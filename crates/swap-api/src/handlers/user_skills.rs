//! Handlers for the caller's own skills
//!
//! Every lookup is scoped to the caller; another account's skill is a 404.

use axum::{extract::State, Json};
use swap_service::dto::{
    CreateUserSkillRequest, UpdateUserSkillRequest, UserSkillQuery, UserSkillResponse,
};
use swap_service::services::UserSkillService;

use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /user-skills?type=offered|wanted
pub async fn list_user_skills(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UserSkillQuery>,
) -> ApiResult<Json<Vec<UserSkillResponse>>> {
    let service = UserSkillService::new(state.service_context());
    let skills = service.list(auth.caller, query.skill_type.as_deref()).await?;
    Ok(Json(skills))
}

/// POST /user-skills
pub async fn create_user_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserSkillRequest>,
) -> ApiResult<Created<Json<UserSkillResponse>>> {
    let service = UserSkillService::new(state.service_context());
    let response = service.create(auth.caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /user-skills/{id}
pub async fn get_user_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<UserSkillResponse>> {
    let service = UserSkillService::new(state.service_context());
    Ok(Json(service.get(auth.caller, id).await?))
}

/// PATCH /user-skills/{id}
pub async fn update_user_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserSkillRequest>,
) -> ApiResult<Json<UserSkillResponse>> {
    let service = UserSkillService::new(state.service_context());
    Ok(Json(service.update(auth.caller, id, request).await?))
}

/// DELETE /user-skills/{id}
pub async fn delete_user_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = UserSkillService::new(state.service_context());
    service.delete(auth.caller, id).await?;
    Ok(NoContent)
}
