//! Skill catalogue handlers

use axum::{extract::State, Json};
use swap_service::dto::{SkillResponse, SkillSearchQuery};
use swap_service::services::SkillService;

use crate::extractors::{AuthUser, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// List approved skills
///
/// GET /skills?search=
pub async fn list_skills(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<SkillSearchQuery>,
) -> ApiResult<Json<Vec<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    let skills = service.list_skills(query.search.as_deref()).await?;
    Ok(Json(skills))
}
