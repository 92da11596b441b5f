//! Attempt tracking with exponential lockout for sensitive actions.
//!
//! The limiter is generic over a [`RateLimitStore`] so the same backoff
//! algorithm runs against the in-process [`MemoryStore`] (single-process
//! deployments, tests) and the Postgres-backed store in `nameforge-db`.
//! Storage failures are logged and treated as "no record found" -- the
//! limiter fails open rather than locking every user out when its own
//! storage is down.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, Utc};
use serde::Serialize;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Actions and per-action configuration
// ---------------------------------------------------------------------------

/// The sensitive actions subject to rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateLimitAction {
    Login,
    Signup,
    ForgotPassword,
    Contact,
}

impl RateLimitAction {
    /// Stable string key used for storage and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitAction::Login => "login",
            RateLimitAction::Signup => "signup",
            RateLimitAction::ForgotPassword => "forgot-password",
            RateLimitAction::Contact => "contact",
        }
    }

    /// Backoff configuration for this action.
    pub fn config(&self) -> RateLimitConfig {
        match self {
            RateLimitAction::Login => RateLimitConfig {
                max_attempts: 5,
                base_delay_secs: 60,
                max_delay_secs: 900,
            },
            RateLimitAction::Signup => RateLimitConfig {
                max_attempts: 3,
                base_delay_secs: 60,
                max_delay_secs: 1800,
            },
            RateLimitAction::ForgotPassword => RateLimitConfig {
                max_attempts: 5,
                base_delay_secs: 60,
                max_delay_secs: 900,
            },
            RateLimitAction::Contact => RateLimitConfig {
                max_attempts: 3,
                base_delay_secs: 300,
                max_delay_secs: 3600,
            },
        }
    }
}

/// Per-action backoff parameters.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Failures tolerated before a lockout window starts.
    pub max_attempts: i64,
    /// First lockout duration in seconds.
    pub base_delay_secs: i64,
    /// Ceiling on the lockout duration in seconds.
    pub max_delay_secs: i64,
}

impl RateLimitConfig {
    /// Lockout duration for a given failure count.
    ///
    /// Doubles per failure beyond `max_attempts`, capped at
    /// `max_delay_secs`. The first lockout (attempts == max_attempts)
    /// lasts `base_delay_secs`.
    pub fn lockout_secs(&self, attempts: i64) -> i64 {
        let over = (attempts - self.max_attempts).max(0);
        // Saturate the shift so absurd attempt counts cannot overflow.
        let exp = over.min(32) as u32;
        self.base_delay_secs
            .saturating_mul(1i64 << exp)
            .min(self.max_delay_secs)
    }
}

// ---------------------------------------------------------------------------
// Record and status
// ---------------------------------------------------------------------------

/// Persisted attempt state for one (identifier, action) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitRecord {
    pub attempts: i64,
    pub last_attempt: Timestamp,
    pub lockout_until: Option<Timestamp>,
}

/// Result of a limit check or failure recording.
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitStatus {
    pub is_allowed: bool,
    /// Seconds until the lockout expires; zero when allowed.
    pub remaining_seconds: i64,
    pub max_attempts: i64,
    pub current_attempts: i64,
}

impl RateLimitStatus {
    fn allowed(config: &RateLimitConfig, attempts: i64) -> Self {
        Self {
            is_allowed: true,
            remaining_seconds: 0,
            max_attempts: config.max_attempts,
            current_attempts: attempts,
        }
    }
}

/// Human copy for a remaining wait: "2 minute(s) and 5 second(s)", or
/// just "45 second(s)" under a minute.
pub fn format_wait(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let minutes = seconds / 60;
    let rest = seconds % 60;
    if minutes > 0 {
        format!("{minutes} minute(s) and {rest} second(s)")
    } else {
        format!("{rest} second(s)")
    }
}

/// Seconds remaining until `lockout_until`, rounded up.
fn remaining_secs(lockout_until: Timestamp, now: Timestamp) -> i64 {
    let ms = (lockout_until - now).num_milliseconds();
    if ms <= 0 {
        0
    } else {
        (ms as u64).div_ceil(1000) as i64
    }
}

// ---------------------------------------------------------------------------
// Store trait
// ---------------------------------------------------------------------------

/// Opaque storage failure. The limiter never propagates these; it logs
/// them and fails open.
#[derive(Debug, thiserror::Error)]
#[error("rate-limit store error: {0}")]
pub struct StoreError(pub String);

/// Storage backend for rate-limit records.
#[async_trait::async_trait]
pub trait RateLimitStore: Send + Sync {
    async fn get(
        &self,
        identifier: &str,
        action: RateLimitAction,
    ) -> Result<Option<RateLimitRecord>, StoreError>;

    async fn put(
        &self,
        identifier: &str,
        action: RateLimitAction,
        record: &RateLimitRecord,
    ) -> Result<(), StoreError>;

    async fn delete(&self, identifier: &str, action: RateLimitAction) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Limiter
// ---------------------------------------------------------------------------

/// The rate limiter proper. Stateless apart from its store.
pub struct RateLimiter<S: RateLimitStore> {
    store: S,
}

impl<S: RateLimitStore> RateLimiter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check whether `identifier` may perform `action` right now.
    ///
    /// An expired lockout resets the record to zero attempts; an active
    /// lockout returns not-allowed with the remaining wait in seconds.
    pub async fn check_limit(
        &self,
        identifier: &str,
        action: RateLimitAction,
    ) -> RateLimitStatus {
        let config = action.config();
        let now = Utc::now();

        let record = match self.store.get(identifier, action).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(
                    identifier,
                    action = action.as_str(),
                    error = %err,
                    "Rate-limit store read failed; failing open"
                );
                None
            }
        };

        let Some(record) = record else {
            return RateLimitStatus::allowed(&config, 0);
        };

        if let Some(lockout_until) = record.lockout_until {
            let remaining = remaining_secs(lockout_until, now);
            if remaining > 0 {
                return RateLimitStatus {
                    is_allowed: false,
                    remaining_seconds: remaining,
                    max_attempts: config.max_attempts,
                    current_attempts: record.attempts,
                };
            }
            // The lockout has fully elapsed: the slate is wiped clean.
            if let Err(err) = self.store.delete(identifier, action).await {
                tracing::warn!(
                    identifier,
                    action = action.as_str(),
                    error = %err,
                    "Failed to clear expired rate-limit record"
                );
            }
            return RateLimitStatus::allowed(&config, 0);
        }

        RateLimitStatus::allowed(&config, record.attempts)
    }

    /// Record a failed attempt and return the resulting status.
    ///
    /// Once the attempt count reaches `max_attempts` the lockout doubles
    /// per additional failure, capped at `max_delay_secs`.
    pub async fn record_failure(
        &self,
        identifier: &str,
        action: RateLimitAction,
    ) -> RateLimitStatus {
        let config = action.config();
        let now = Utc::now();

        let prior = match self.store.get(identifier, action).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(
                    identifier,
                    action = action.as_str(),
                    error = %err,
                    "Rate-limit store read failed; failing open"
                );
                None
            }
        };

        // An expired lockout counts as a clean slate before incrementing.
        let prior_attempts = match &prior {
            Some(r) => match r.lockout_until {
                Some(until) if remaining_secs(until, now) == 0 => 0,
                _ => r.attempts,
            },
            None => 0,
        };

        let attempts = prior_attempts + 1;
        let lockout_until = if attempts >= config.max_attempts {
            Some(now + Duration::seconds(config.lockout_secs(attempts)))
        } else {
            None
        };

        let record = RateLimitRecord {
            attempts,
            last_attempt: now,
            lockout_until,
        };

        if let Err(err) = self.store.put(identifier, action, &record).await {
            tracing::warn!(
                identifier,
                action = action.as_str(),
                error = %err,
                "Rate-limit store write failed; failing open"
            );
            // Without persistence the failure cannot count against anyone.
            return RateLimitStatus::allowed(&config, 0);
        }

        match lockout_until {
            Some(until) => RateLimitStatus {
                is_allowed: false,
                remaining_seconds: remaining_secs(until, now),
                max_attempts: config.max_attempts,
                current_attempts: attempts,
            },
            None => RateLimitStatus::allowed(&config, attempts),
        }
    }

    /// Clear all attempt state for `identifier` after a successful action.
    pub async fn record_success(&self, identifier: &str, action: RateLimitAction) {
        if let Err(err) = self.store.delete(identifier, action).await {
            tracing::warn!(
                identifier,
                action = action.as_str(),
                error = %err,
                "Failed to clear rate-limit record on success"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Process-local store. Used in tests and wherever limits only need to
/// hold within one process (the moral equivalent of browser-local state:
/// the identifier space is scoped to this instance).
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<(String, &'static str), RateLimitRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RateLimitStore for MemoryStore {
    async fn get(
        &self,
        identifier: &str,
        action: RateLimitAction,
    ) -> Result<Option<RateLimitRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(records.get(&(identifier.to_string(), action.as_str())).cloned())
    }

    async fn put(
        &self,
        identifier: &str,
        action: RateLimitAction,
        record: &RateLimitRecord,
    ) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError(e.to_string()))?;
        records.insert((identifier.to_string(), action.as_str()), record.clone());
        Ok(())
    }

    async fn delete(&self, identifier: &str, action: RateLimitAction) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError(e.to_string()))?;
        records.remove(&(identifier.to_string(), action.as_str()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
