//! Integration tests for the Postgres rate-limit store: record
//! lifecycle through the limiter and raw store upsert semantics.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use nameforge_core::rate_limit::{
    RateLimitAction, RateLimitRecord, RateLimitStore, RateLimiter,
};
use nameforge_db::repositories::PgRateLimitStore;

#[sqlx::test(migrations = "./migrations")]
async fn store_upsert_read_delete(pool: PgPool) {
    let store = PgRateLimitStore::new(pool);
    let now = Utc::now();

    assert!(store
        .get("1.2.3.4", RateLimitAction::Contact)
        .await
        .unwrap()
        .is_none());

    let record = RateLimitRecord {
        attempts: 2,
        last_attempt: now,
        lockout_until: None,
    };
    store
        .put("1.2.3.4", RateLimitAction::Contact, &record)
        .await
        .unwrap();

    let read = store
        .get("1.2.3.4", RateLimitAction::Contact)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read.attempts, 2);
    assert!(read.lockout_until.is_none());

    // Upsert replaces in place.
    let locked = RateLimitRecord {
        attempts: 3,
        last_attempt: now,
        lockout_until: Some(now + Duration::seconds(300)),
    };
    store
        .put("1.2.3.4", RateLimitAction::Contact, &locked)
        .await
        .unwrap();
    let read = store
        .get("1.2.3.4", RateLimitAction::Contact)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read.attempts, 3);
    assert!(read.lockout_until.is_some());

    store
        .delete("1.2.3.4", RateLimitAction::Contact)
        .await
        .unwrap();
    assert!(store
        .get("1.2.3.4", RateLimitAction::Contact)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn limiter_locks_and_resets_through_postgres(pool: PgPool) {
    let limiter = RateLimiter::new(PgRateLimitStore::new(pool));

    // Contact tolerates 3 attempts; the third locks.
    limiter
        .record_failure("9.9.9.9", RateLimitAction::Contact)
        .await;
    limiter
        .record_failure("9.9.9.9", RateLimitAction::Contact)
        .await;
    let status = limiter
        .record_failure("9.9.9.9", RateLimitAction::Contact)
        .await;
    assert!(!status.is_allowed);
    assert!(status.remaining_seconds > 0);

    let check = limiter.check_limit("9.9.9.9", RateLimitAction::Contact).await;
    assert!(!check.is_allowed);

    limiter
        .record_success("9.9.9.9", RateLimitAction::Contact)
        .await;
    let check = limiter.check_limit("9.9.9.9", RateLimitAction::Contact).await;
    assert!(check.is_allowed);
    assert_eq!(check.current_attempts, 0);
}
