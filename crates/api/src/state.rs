use std::sync::Arc;

use nameforge_core::rate_limit::RateLimiter;
use nameforge_db::repositories::PgRateLimitStore;
use nameforge_llm::CompletionBackend;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: nameforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Completion backend; a real HTTP client in production, a mock in tests.
    pub completion: Arc<dyn CompletionBackend>,
    /// Server-side rate limiter over the Postgres store.
    pub rate_limiter: Arc<RateLimiter<PgRateLimitStore>>,
}
