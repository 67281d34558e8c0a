//! User discovery handlers

use axum::{extract::State, Json};
use swap_service::dto::{PublicProfileResponse, UserSearchQuery};
use swap_service::services::SearchService;

use crate::extractors::{AuthUser, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Search public profiles by offered skill
///
/// GET /users/search?q=
pub async fn search_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<UserSearchQuery>,
) -> ApiResult<Json<Vec<PublicProfileResponse>>> {
    let service = SearchService::new(state.service_context());
    Ok(Json(service.search_users(&query.q).await?))
}
