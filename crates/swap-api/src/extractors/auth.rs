//! Authentication extractor
//!
//! Validates the bearer access token and resolves it to an active account.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use swap_common::AppError;
use swap_core::Caller;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub caller: Caller,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        let account_id = claims.account_id()?;

        // Tokens outlive bans, so the account is checked on every request
        let account = app_state
            .service_context()
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !account.is_active {
            tracing::warn!(account_id = %account.id, "Token presented for inactive account");
            return Err(AppError::AccountDisabled.into());
        }

        Ok(Self {
            caller: Caller::from(&account),
        })
    }
}
