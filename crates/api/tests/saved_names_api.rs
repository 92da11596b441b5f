//! Integration tests for the authenticated `/api/v1/saved-names`
//! endpoints: token enforcement, CRUD, and per-user scoping.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, mint_token, patch_json_auth, post_json, post_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Requests without a bearer token are rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn saved_names_require_authentication(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/saved-names").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/saved-names",
        serde_json::json!({ "name": "Luna" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A token signed with the wrong secret is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn saved_names_reject_bad_token(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/saved-names", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// Saving a name returns 201 with the stored row; the name is trimmed.
#[sqlx::test(migrations = "../db/migrations")]
async fn save_and_list_names(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "user");

    let response = post_json_auth(
        app.clone(),
        "/api/v1/saved-names",
        &token,
        serde_json::json!({ "name": "  Luna  ", "tool_slug": "cat-names" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Luna");
    assert_eq!(json["data"]["tool_slug"], "cat-names");
    assert_eq!(json["data"]["is_favorite"], false);

    let response = get_auth(app, "/api/v1/saved-names", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// Blank names are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn save_rejects_blank_name(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(1, "user");

    let response = post_json_auth(
        app,
        "/api/v1/saved-names",
        &token,
        serde_json::json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Toggling the favorite flag updates the row, and the favorites-only
/// listing reflects it.
#[sqlx::test(migrations = "../db/migrations")]
async fn favorite_toggle_and_filter(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(7, "user");

    let response = post_json_auth(
        app.clone(),
        "/api/v1/saved-names",
        &token,
        serde_json::json!({ "name": "Max" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    post_json_auth(
        app.clone(),
        "/api/v1/saved-names",
        &token,
        serde_json::json!({ "name": "Rex" }),
    )
    .await;

    let response = patch_json_auth(
        app.clone(),
        &format!("/api/v1/saved-names/{id}/favorite"),
        &token,
        serde_json::json!({ "is_favorite": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_favorite"], true);

    let response = get_auth(
        app,
        "/api/v1/saved-names?favorites_only=true",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let names = json["data"].as_array().unwrap();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0]["name"], "Max");
}

/// Deleting a name returns 204 and removes it from the listing.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_name(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);
    let token = mint_token(2, "user");

    let response = post_json_auth(
        app.clone(),
        "/api/v1/saved-names",
        &token,
        serde_json::json!({ "name": "Biscuit" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/v1/saved-names/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, "/api/v1/saved-names", &token).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Per-user scoping
// ---------------------------------------------------------------------------

/// One user's names are invisible to another, and cross-user deletes
/// and favorite updates report 404 rather than touching the row.
#[sqlx::test(migrations = "../db/migrations")]
async fn names_are_scoped_to_their_owner(pool: PgPool) {
    let (app, _mock) = common::build_test_app(pool);
    let owner = mint_token(10, "user");
    let other = mint_token(11, "user");

    let response = post_json_auth(
        app.clone(),
        "/api/v1/saved-names",
        &owner,
        serde_json::json!({ "name": "Luna" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get_auth(app.clone(), "/api/v1/saved-names", &other).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let response = delete_auth(app.clone(), &format!("/api/v1/saved-names/{id}"), &other).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_json_auth(
        app.clone(),
        &format!("/api/v1/saved-names/{id}/favorite"),
        &other,
        serde_json::json!({ "is_favorite": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner still sees the untouched row.
    let response = get_auth(app, "/api/v1/saved-names", &owner).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
