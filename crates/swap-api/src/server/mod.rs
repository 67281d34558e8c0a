//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use swap_common::{AppConfig, AppError, JwtService};
use swap_db::{
    create_pool, run_migrations, PgAccountRepository, PgFeedbackRepository, PgPool,
    PgProfileRepository, PgSkillRepository, PgSwapRequestRepository, PgUserSkillRepository,
};
use swap_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let api = apply_rate_limit(create_router(), &state.config().rate_limit)?;
    let router = apply_middleware(api.merge(health_routes()), state.config());
    Ok(router.with_state(state))
}

/// Wire the PostgreSQL repositories into a service context
pub fn build_service_context(pool: &PgPool, config: &AppConfig) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    ServiceContext::builder()
        .account_repo(Arc::new(PgAccountRepository::new(pool.clone())))
        .profile_repo(Arc::new(PgProfileRepository::new(pool.clone())))
        .skill_repo(Arc::new(PgSkillRepository::new(pool.clone())))
        .user_skill_repo(Arc::new(PgUserSkillRepository::new(pool.clone())))
        .swap_repo(Arc::new(PgSwapRequestRepository::new(pool.clone())))
        .feedback_repo(Arc::new(PgFeedbackRepository::new(pool.clone())))
        .jwt_service(jwt_service)
        .build()
        .map_err(AppError::from)
}

/// Connect to the database and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database).await.map_err(AppError::internal)?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool).await.map_err(AppError::internal)?;
    }

    let service_context = build_service_context(&pool, &config)?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state)?;
    run_server(app, &addr).await
}
