//! Authentication service
//!
//! Handles account registration, login, and token refresh. Tokens are
//! stateless JWTs; refresh re-checks that the account still exists and is active.

use swap_common::auth::{hash_password, validate_password_strength, verify_password};
use swap_common::AppError;
use swap_core::entities::{Account, NewAccount};
use swap_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AccountResponse, AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account together with its profile
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        if request.password != request.password2 {
            return Err(DomainError::PasswordMismatch.into());
        }
        validate_password_strength(&request.password)?;

        let password_hash = hash_password(&request.password)?;
        let new_account = NewAccount {
            username: request.username,
            email: request.email,
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
        };

        let (account, _profile) = self
            .ctx
            .account_repo()
            .create_with_profile(&new_account, &password_hash)
            .await?;

        info!(account_id = %account.id, "Account registered");

        self.issue(account)
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .account_repo()
            .get_password_hash(account.id)
            .await?
            .ok_or_else(|| {
                warn!(account_id = %account.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(account_id = %account.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        // Same response as bad credentials
        if !account.is_active {
            warn!(account_id = %account.id, "Login failed: account disabled");
            return Err(AppError::InvalidCredentials.into());
        }

        self.ctx.account_repo().record_login(account.id).await?;

        info!(account_id = %account.id, "Account logged in");

        self.issue(account)
    }

    /// Exchange a refresh token for a new pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh)
            .inspect_err(|e| warn!(error = %e, "Refresh rejected"))?;
        let account_id = claims.account_id()?;

        let account = self
            .ctx
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !account.is_active {
            warn!(account_id = %account.id, "Refresh rejected: account disabled");
            return Err(AppError::AccountDisabled.into());
        }

        self.issue(account)
    }

    fn issue(&self, account: Account) -> ServiceResult<AuthResponse> {
        let tokens = self.ctx.jwt_service().issue(account.id)?;
        Ok(AuthResponse {
            tokens,
            user: AccountResponse::from(account),
        })
    }
}
