//! Postgres-backed store for the rate limiter.
//!
//! Implements [`RateLimitStore`] over the `rate_limits` table so the
//! limiter survives process restarts and is shared across instances.
//! Errors are stringified into [`StoreError`]; the limiter logs them
//! and fails open.

use sqlx::FromRow;

use nameforge_core::rate_limit::{RateLimitAction, RateLimitRecord, RateLimitStore, StoreError};
use nameforge_core::types::Timestamp;

use crate::DbPool;

#[derive(Debug, FromRow)]
struct RateLimitRow {
    attempts: i64,
    last_attempt: Timestamp,
    lockout_until: Option<Timestamp>,
}

impl From<RateLimitRow> for RateLimitRecord {
    fn from(row: RateLimitRow) -> Self {
        RateLimitRecord {
            attempts: row.attempts,
            last_attempt: row.last_attempt,
            lockout_until: row.lockout_until,
        }
    }
}

/// Rate-limit store over the shared connection pool.
#[derive(Clone)]
pub struct PgRateLimitStore {
    pool: DbPool,
}

impl PgRateLimitStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RateLimitStore for PgRateLimitStore {
    async fn get(
        &self,
        identifier: &str,
        action: RateLimitAction,
    ) -> Result<Option<RateLimitRecord>, StoreError> {
        let row = sqlx::query_as::<_, RateLimitRow>(
            "SELECT attempts, last_attempt, lockout_until \
             FROM rate_limits WHERE identifier = $1 AND action = $2",
        )
        .bind(identifier)
        .bind(action.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError(e.to_string()))?;

        Ok(row.map(RateLimitRecord::from))
    }

    async fn put(
        &self,
        identifier: &str,
        action: RateLimitAction,
        record: &RateLimitRecord,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO rate_limits (identifier, action, attempts, last_attempt, lockout_until) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (identifier, action) DO UPDATE SET \
                attempts = EXCLUDED.attempts, \
                last_attempt = EXCLUDED.last_attempt, \
                lockout_until = EXCLUDED.lockout_until",
        )
        .bind(identifier)
        .bind(action.as_str())
        .bind(record.attempts)
        .bind(record.last_attempt)
        .bind(record.lockout_until)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, identifier: &str, action: RateLimitAction) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM rate_limits WHERE identifier = $1 AND action = $2")
            .bind(identifier)
            .bind(action.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        Ok(())
    }
}
