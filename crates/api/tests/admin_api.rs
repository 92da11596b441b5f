//! Integration tests for the admin panel: role enforcement, contact
//! triage, and tool management.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, mint_token, post_json_auth, put_json_auth, seed_tool,
};
use sqlx::PgPool;

/// Insert a contact submission directly and return its id.
async fn seed_submission(pool: &PgPool, subject: &str, is_spam: bool) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO contact_submissions (name, email, subject, message, is_spam, spam_reason)
         VALUES ('Sender', 'sender@example.com', $1, 'A long enough message body.', $2, $3)
         RETURNING id",
    )
    .bind(subject)
    .bind(is_spam)
    .bind(if is_spam { Some("Message contains known spam keywords") } else { None })
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

// ---------------------------------------------------------------------------
// Role enforcement
// ---------------------------------------------------------------------------

/// Non-admin tokens are rejected with 403 on every admin route.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_non_admin(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "user");

    let response = get_auth(app.clone(), "/api/v1/admin/contact", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");

    let response = post_json_auth(
        app,
        "/api/v1/admin/tools",
        &token,
        serde_json::json!({ "slug": "x", "name": "X", "category": "pets" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Unauthenticated requests get 401 before the role check.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_missing_token(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/admin/contact").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Contact triage
// ---------------------------------------------------------------------------

/// Spam is hidden from the default listing and included only with
/// `include_spam=true`.
#[sqlx::test(migrations = "../db/migrations")]
async fn contact_listing_hides_spam_by_default(pool: PgPool) {
    seed_submission(&pool, "Real question", false).await;
    seed_submission(&pool, "Great offer", true).await;
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "admin");

    let response = get_auth(app.clone(), "/api/v1/admin/contact", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["subject"], "Real question");

    let response = get_auth(app, "/api/v1/admin/contact?include_spam=true", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// Updating a submission's status moves it through triage, and bogus
/// statuses are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn contact_status_updates(pool: PgPool) {
    let id = seed_submission(&pool, "Real question", false).await;
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "admin");

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/contact/{id}/status"),
        &token,
        serde_json::json!({ "status": "resolved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "resolved");

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/contact/{id}/status"),
        &token,
        serde_json::json!({ "status": "archived" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        "/api/v1/admin/contact/999999/status",
        &token,
        serde_json::json!({ "status": "read" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The stats endpoint aggregates totals, spam, and unread counts.
#[sqlx::test(migrations = "../db/migrations")]
async fn contact_stats_counts(pool: PgPool) {
    seed_submission(&pool, "One", false).await;
    seed_submission(&pool, "Two", false).await;
    seed_submission(&pool, "Offer", true).await;
    let read_id = seed_submission(&pool, "Three", false).await;
    sqlx::query("UPDATE contact_submissions SET status = 'read' WHERE id = $1")
        .bind(read_id)
        .execute(&pool)
        .await
        .unwrap();

    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "admin");

    let response = get_auth(app, "/api/v1/admin/contact/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 4);
    assert_eq!(json["data"]["spam"], 1);
    assert_eq!(json["data"]["unread"], 3);
}

// ---------------------------------------------------------------------------
// Tool management
// ---------------------------------------------------------------------------

/// Creating a tool returns 201; a duplicate slug returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn tool_create_and_conflict(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "admin");

    let body = serde_json::json!({
        "slug": "cat-names",
        "name": "Cat Name Generator",
        "category": "pets",
        "is_published": true
    });
    let response = post_json_auth(app.clone(), "/api/v1/admin/tools", &token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "cat-names");

    let response = post_json_auth(app, "/api/v1/admin/tools", &token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// Partial updates change only the provided fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn tool_partial_update(pool: PgPool) {
    let id = seed_tool(&pool, "dog-names", "pets", false).await;
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "admin");

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/tools/{id}"),
        &token,
        serde_json::json!({ "is_published": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_published"], true);
    assert_eq!(json["data"]["category"], "pets");
}

/// Deleting a tool returns 204; deleting it again returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn tool_delete(pool: PgPool) {
    let id = seed_tool(&pool, "dog-names", "pets", true).await;
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "admin");

    let response = delete_auth(app.clone(), &format!("/api/v1/admin/tools/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/api/v1/admin/tools/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
