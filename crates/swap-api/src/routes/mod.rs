//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, auth, feedback, health, profile, skills, swaps, user_skills, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(skill_routes())
        .merge(swap_routes())
        .merge(feedback_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/token/refresh", post(auth::refresh_token))
}

/// Own profile and user discovery
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_profile)
                .put(profile::update_profile)
                .patch(profile::update_profile),
        )
        .route("/users/search", get(users::search_users))
}

/// Skill catalogue and the caller's own skills
fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(skills::list_skills))
        .route(
            "/user-skills",
            get(user_skills::list_user_skills).post(user_skills::create_user_skill),
        )
        .route(
            "/user-skills/:id",
            get(user_skills::get_user_skill)
                .patch(user_skills::update_user_skill)
                .delete(user_skills::delete_user_skill),
        )
}

/// Swap request workflow
fn swap_routes() -> Router<AppState> {
    Router::new()
        .route("/swaps", get(swaps::list_swaps).post(swaps::create_swap))
        .route(
            "/swaps/:id",
            get(swaps::get_swap)
                .put(swaps::update_swap_status)
                .patch(swaps::update_swap_status)
                .delete(swaps::delete_swap),
        )
}

fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(feedback::create_feedback))
        .route("/feedback/received", get(feedback::received_feedback))
}

/// Admin-only routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Skills
        .route("/admin/skills", get(admin::list_skills).post(admin::create_skill))
        .route(
            "/admin/skills/:id",
            get(admin::get_skill)
                .put(admin::update_skill)
                .patch(admin::update_skill)
                .delete(admin::delete_skill),
        )
        .route("/admin/skills/:id/approve", post(admin::approve_skill))
        .route("/admin/skills/:id/reject", post(admin::reject_skill))
        // Users
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/:id", get(admin::get_user).delete(admin::delete_user))
        .route("/admin/users/:id/ban", post(admin::ban_user))
        .route("/admin/users/:id/activate", post(admin::activate_user))
        // Swaps
        .route("/admin/swaps", get(admin::list_swaps))
        .route("/admin/swaps/:id", get(admin::get_swap))
        // Export
        .route("/admin/export", get(admin::export_csv))
}
