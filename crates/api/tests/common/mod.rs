#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use nameforge_api::auth::jwt::{Claims, JwtConfig};
use nameforge_api::config::ServerConfig;
use nameforge_api::router::build_app_router;
use nameforge_api::state::AppState;
use nameforge_core::rate_limit::RateLimiter;
use nameforge_db::repositories::PgRateLimitStore;
use nameforge_llm::MockBackend;

/// HMAC secret shared between token minting below and the router's
/// validation path.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The completion fields are dummies;
/// tests talk to a `MockBackend` instead of a real endpoint.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
        completion_api_url: "http://localhost:1/unused".to_string(),
        completion_api_key: "test-key".to_string(),
        default_model: "test/default-model".to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and a scripted completion backend.
///
/// This goes through the same `build_app_router` as `main.rs`, so
/// integration tests exercise the production middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery). The returned
/// `MockBackend` handle can be scripted before or after requests; it
/// shares state with the router through the `Arc`.
pub fn build_test_app(pool: PgPool) -> (Router, Arc<MockBackend>) {
    let config = test_config();
    let completion = Arc::new(MockBackend::new());
    let rate_limiter = Arc::new(RateLimiter::new(PgRateLimitStore::new(pool.clone())));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        completion: completion.clone(),
        rate_limiter,
    };

    (build_app_router(state, &config), completion)
}

/// Mint a signed access token for the given user id and role.
pub fn mint_token(user_id: i64, role: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn patch_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PATCH")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Database seeding
// ---------------------------------------------------------------------------

/// Insert a row into `ai_models` and return its slug.
pub async fn seed_model(pool: &PgPool, slug: &str, display_name: &str, is_active: bool) {
    sqlx::query("INSERT INTO ai_models (slug, display_name, is_active) VALUES ($1, $2, $3)")
        .bind(slug)
        .bind(display_name)
        .bind(is_active)
        .execute(pool)
        .await
        .expect("model seed should succeed");
}

/// Insert a tool row directly.
pub async fn seed_tool(pool: &PgPool, slug: &str, category: &str, is_published: bool) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO tools (slug, name, description, category, is_published)
         VALUES ($1, $2, '', $3, $4)
         RETURNING id",
    )
    .bind(slug)
    .bind(slug)
    .bind(category)
    .bind(is_published)
    .fetch_one(pool)
    .await
    .expect("tool seed should succeed");
    id
}

/// Insert a content block directly.
pub async fn seed_content_block(
    pool: &PgPool,
    page: &str,
    section: &str,
    body: &str,
    sort_order: i32,
    is_published: bool,
) {
    sqlx::query(
        "INSERT INTO content_blocks (page, section, body, sort_order, is_published)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(page)
    .bind(section)
    .bind(body)
    .bind(sort_order)
    .bind(is_published)
    .execute(pool)
    .await
    .expect("content seed should succeed");
}
