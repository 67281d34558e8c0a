//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`; migrations are applied on startup. Without it every test
//! returns early.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn server() -> Option<TestServer> {
    if !check_test_env() {
        return None;
    }
    Some(TestServer::start().await.expect("Failed to start server"))
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let Some(server) = server().await else { return };

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn test_register_creates_public_profile() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();

    let response = server.get_auth("/api/profile", &user.token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.username, user.username);
    assert!(profile.is_public);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let Some(server) = server().await else { return };
    let request = RegisterRequest::unique();

    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/register", &request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "USERNAME_TAKEN");
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let Some(server) = server().await else { return };
    let mut request = RegisterRequest::unique();
    request.password2 = "Different123".to_string();

    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_and_refresh() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();

    let response = server
        .post("/api/login", &json!({ "username": user.username, "password": TEST_PASSWORD }))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.id, user.id);
    assert!(!auth.access.is_empty());

    let response = server
        .post("/api/token/refresh", &json!({ "refresh": user.refresh }))
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.refresh.is_empty());

    // An access token is not a refresh token
    let response = server
        .post("/api/token/refresh", &json!({ "refresh": user.token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();

    let response = server
        .post("/api/login", &json!({ "username": user.username, "password": "Wrong12345" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_profile_update() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();

    let response = server
        .put_auth("/api/profile", &user.token, &json!({ "location": "Lisbon", "is_public": false }))
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.location.as_deref(), Some("Lisbon"));
    assert!(!profile.is_public);
}

// ============================================================================
// Skills
// ============================================================================

#[tokio::test]
async fn test_user_skill_duplicate_triple() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();
    let name = format!("Chess-{}", unique_suffix());

    let first = user.add_skill(&server, &name, "offered").await.unwrap();
    assert_eq!(first.skill_name, name.to_lowercase());

    // Same skill, other direction is fine
    user.add_skill(&server, &name, "wanted").await.unwrap();

    let body = json!({ "skill_name": name.to_uppercase(), "skill_type": "offered" });
    let response = server.post_auth("/api/user-skills", &user.token, &body).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "DUPLICATE_USER_SKILL");
}

#[tokio::test]
async fn test_user_skill_validation() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();

    let body = json!({ "skill_name": "knitting", "skill_type": "offered", "proficiency_level": 6 });
    let response = server.post_auth("/api/user-skills", &user.token, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let body = json!({ "skill_name": "knitting", "skill_type": "hoarded" });
    let response = server.post_auth("/api/user-skills", &user.token, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_user_skills_are_owner_scoped() {
    let Some(server) = server().await else { return };
    let owner = TestUser::register(&server).await.unwrap();
    let other = TestUser::register(&server).await.unwrap();
    let skill = owner
        .add_skill(&server, &format!("origami-{}", unique_suffix()), "offered")
        .await
        .unwrap();
    let path = format!("/api/user-skills/{}", skill.id);

    let response = server.get_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/api/user-skills?type=offered", &other.token).await.unwrap();
    let listed: Vec<UserSkillResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());

    let response = server.delete_auth(&path, &owner.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_skill_catalogue_search() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();
    let name = format!("calligraphy-{}", unique_suffix());
    user.add_skill(&server, &name, "wanted").await.unwrap();

    let response = server
        .get_auth(&format!("/api/skills?search={}", name.to_uppercase()), &user.token)
        .await
        .unwrap();
    let skills: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0]["name"], name);
}

// ============================================================================
// Discovery
// ============================================================================

#[tokio::test]
async fn test_user_search() {
    let Some(server) = server().await else { return };
    let visible = TestUser::register(&server).await.unwrap();
    let hidden = TestUser::register(&server).await.unwrap();
    let searcher = TestUser::register(&server).await.unwrap();
    let name = format!("beekeeping-{}", unique_suffix());

    visible.add_skill(&server, &name, "offered").await.unwrap();
    hidden.add_skill(&server, &name, "offered").await.unwrap();
    hidden.set_public(&server, false).await.unwrap();

    let response = server.get_auth("/api/users/search?q=", &searcher.token).await.unwrap();
    let results: Vec<PublicProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.is_empty());

    let response = server
        .get_auth(&format!("/api/users/search?q={}", name.to_uppercase()), &searcher.token)
        .await
        .unwrap();
    let results: Vec<PublicProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![visible.id]);
}

// ============================================================================
// Swaps
// ============================================================================

#[tokio::test]
async fn test_swap_with_foreign_requester_skill() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();

    let mut body = pair.proposal();
    body["requester_skill"] = json!(pair.recipient_skill);
    let response = server.post_auth("/api/swaps", &pair.requester.token, &body).await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "REQUESTER_SKILL_NOT_OWNED");
}

#[tokio::test]
async fn test_duplicate_pending_swap() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();
    let first = pair.propose(&server).await.unwrap();
    assert_eq!(first.status, "pending");
    assert_eq!(first.requester, pair.requester.id);

    let response = server
        .post_auth("/api/swaps", &pair.requester.token, &pair.proposal())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "DUPLICATE_PENDING_SWAP");

    // Once the first is rejected the same proposal may be made again
    let response = pair.set_status(&server, &pair.recipient, first.id, "rejected").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    pair.propose(&server).await.unwrap();
}

#[tokio::test]
async fn test_pending_transitions() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();
    let swap = pair.propose(&server).await.unwrap();

    let response = pair.set_status(&server, &pair.requester, swap.id, "accepted").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = pair.set_status(&server, &pair.recipient, swap.id, "completed").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_TRANSITION");

    let response = pair.set_status(&server, &pair.recipient, swap.id, "accepted").await.unwrap();
    let accepted: SwapResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(accepted.status, "accepted");
}

#[tokio::test]
async fn test_accepted_completion() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();
    let outsider = TestUser::register(&server).await.unwrap();
    let swap = pair.propose(&server).await.unwrap();

    let response = pair.set_status(&server, &pair.recipient, swap.id, "accepted").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = pair.set_status(&server, &outsider, swap.id, "completed").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = pair.set_status(&server, &pair.requester, swap.id, "completed").await.unwrap();
    let done: SwapResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(done.status, "completed");

    // Terminal
    let response = pair.set_status(&server, &pair.requester, swap.id, "accepted").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_swap_deletion_rules() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();
    let swap = pair.propose(&server).await.unwrap();
    let path = format!("/api/swaps/{}", swap.id);

    let response = server.delete_auth(&path, &pair.recipient.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = pair.set_status(&server, &pair.recipient, swap.id, "accepted").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    for user in [&pair.requester, &pair.recipient] {
        let response = server.delete_auth(&path, &user.token).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }

    let fresh = SwapPair::new(&server).await.unwrap();
    let swap = fresh.propose(&server).await.unwrap();
    let response = server
        .delete_auth(&format!("/api/swaps/{}", swap.id), &fresh.requester.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_swap_listing_by_role() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();
    let outsider = TestUser::register(&server).await.unwrap();
    let swap = pair.propose(&server).await.unwrap();

    let response = server.get_auth("/api/swaps?role=sent", &pair.requester.token).await.unwrap();
    let sent: Vec<SwapResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sent.len(), 1);

    let response = server.get_auth("/api/swaps?role=sent", &pair.recipient.token).await.unwrap();
    let sent: Vec<SwapResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(sent.is_empty());

    let response = server
        .get_auth("/api/swaps?role=received&status=pending", &pair.recipient.token)
        .await
        .unwrap();
    let received: Vec<SwapResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(received.len(), 1);

    let response = server.get_auth("/api/swaps?role=everyone", &pair.recipient.token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth(&format!("/api/swaps/{}", swap.id), &outsider.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Feedback
// ============================================================================

#[tokio::test]
async fn test_feedback_preconditions() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();
    let swap = pair.propose(&server).await.unwrap();
    let body = json!({ "swap_request": swap.id, "rating": 5, "comment": "Great" });

    let response = server.post_auth("/api/feedback", &pair.requester.token, &body).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "SWAP_NOT_COMPLETED");

    let response = pair.set_status(&server, &pair.recipient, swap.id, "accepted").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_auth("/api/feedback", &pair.requester.token, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_feedback_on_completed_swap() {
    let Some(server) = server().await else { return };
    let pair = SwapPair::new(&server).await.unwrap();
    let outsider = TestUser::register(&server).await.unwrap();
    let swap = pair.completed(&server).await.unwrap();
    let body = json!({ "swap_request": swap.id, "rating": 4, "comment": "Patient teacher" });

    let response = server.post_auth("/api/feedback", &outsider.token, &body).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.post_auth("/api/feedback", &pair.requester.token, &body).await.unwrap();
    let feedback: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(feedback.from_user, pair.requester.id);
    assert_eq!(feedback.to_user, pair.recipient.id);
    assert_eq!(feedback.rating, 4);

    let response = server.post_auth("/api/feedback", &pair.requester.token, &body).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "DUPLICATE_FEEDBACK");

    let response = server.get_auth("/api/feedback/received", &pair.recipient.token).await.unwrap();
    let received: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, feedback.id);
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_admin_endpoints_require_admin() {
    let Some(server) = server().await else { return };
    let user = TestUser::register(&server).await.unwrap();

    for path in ["/api/admin/users", "/api/admin/skills", "/api/admin/swaps", "/api/admin/export"] {
        let response = server.get_auth(path, &user.token).await.unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }
}

#[tokio::test]
async fn test_admin_ban_and_activate() {
    let Some(server) = server().await else { return };
    let admin = TestUser::register_admin(&server).await.unwrap();
    let user = TestUser::register(&server).await.unwrap();

    let response = server
        .post_auth(&format!("/api/admin/users/{}/ban", user.id), &admin.token, &json!({}))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "user banned");

    // Existing tokens stop working and login is refused
    let response = server.get_auth("/api/profile", &user.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    let response = server
        .post("/api/login", &json!({ "username": user.username, "password": TEST_PASSWORD }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth(&format!("/api/admin/users/{}/activate", user.id), &admin.token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.get_auth("/api/profile", &user.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(&format!("/api/admin/users/{}/ban", admin.id), &admin.token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_admin_skill_moderation() {
    let Some(server) = server().await else { return };
    let admin = TestUser::register_admin(&server).await.unwrap();
    let user = TestUser::register(&server).await.unwrap();
    let name = format!("fencing-{}", unique_suffix());
    let skill = user.add_skill(&server, &name, "offered").await.unwrap();

    let response = server
        .post_auth(&format!("/api/admin/skills/{}/reject", skill.skill), &admin.token, &json!({}))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "skill rejected");

    let response = server
        .get_auth(&format!("/api/skills?search={name}"), &user.token)
        .await
        .unwrap();
    let listed: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());

    let response = server
        .post_auth(&format!("/api/admin/skills/{}/approve", skill.skill), &admin.token, &json!({}))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "skill approved");
}

#[tokio::test]
async fn test_admin_skill_catalogue_editing() {
    let Some(server) = server().await else { return };
    let admin = TestUser::register_admin(&server).await.unwrap();
    let user = TestUser::register(&server).await.unwrap();
    let name = format!("Archery-{}", unique_suffix());

    let response = server
        .post_auth("/api/admin/skills", &user.token, &json!({ "name": name }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/api/admin/skills", &admin.token, &json!({ "name": name }))
        .await
        .unwrap();
    let created: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created["name"], name.to_lowercase());
    let id = created["id"].as_i64().unwrap();

    let response = server
        .post_auth("/api/admin/skills", &admin.token, &json!({ "name": name.to_uppercase() }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "DUPLICATE_SKILL_NAME");

    let renamed = format!("bowmaking-{}", unique_suffix());
    let response = server
        .patch_auth(&format!("/api/admin/skills/{id}"), &admin.token, &json!({ "name": renamed }))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["name"], renamed);

    let listed = user.add_skill(&server, &renamed, "wanted").await.unwrap();
    assert_eq!(listed.skill, id);

    let response = server
        .delete_auth(&format!("/api/admin/skills/{id}"), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/user-skills/{}", listed.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_admin_delete_user() {
    let Some(server) = server().await else { return };
    let admin = TestUser::register_admin(&server).await.unwrap();
    let pair = SwapPair::new(&server).await.unwrap();
    let swap = pair.propose(&server).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/admin/users/{}", admin.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/admin/users/{}", pair.requester.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone with the account: its tokens, and the swaps it took part in
    let response = server.get_auth("/api/profile", &pair.requester.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    let response = server
        .get_auth(&format!("/api/admin/swaps/{}", swap.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_admin_swap_listing_and_export() {
    let Some(server) = server().await else { return };
    let admin = TestUser::register_admin(&server).await.unwrap();
    let pair = SwapPair::new(&server).await.unwrap();
    let swap = pair.completed(&server).await.unwrap();

    let response = server
        .get_auth("/api/admin/swaps?status=completed", &admin.token)
        .await
        .unwrap();
    let swaps: Vec<SwapResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(swaps.iter().any(|s| s.id == swap.id));
    assert!(swaps.iter().all(|s| s.status == "completed"));

    let response = server
        .get_auth(&format!("/api/admin/swaps/{}", swap.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/admin/export?type=swaps", &admin.token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/csv");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"swaps.csv\""
    );
    let csv = response.text().await.unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("ID,Requester,Recipient,Status,Created,Updated"));
    assert!(lines.any(|line| line.starts_with(&format!("{},", swap.id))));

    let response = server
        .get_auth("/api/admin/export?type=ledgers", &admin.token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"ledgers.csv\""
    );
    assert!(response.text().await.unwrap().is_empty());
}
