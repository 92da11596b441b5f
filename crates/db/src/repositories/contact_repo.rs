//! Repository for the `contact_submissions` table.

use sqlx::PgPool;

use nameforge_core::spam::SpamVerdict;
use nameforge_core::types::DbId;

use crate::models::contact_submission::{ContactStats, ContactSubmission};

/// Column list for `contact_submissions` queries.
const COLUMNS: &str = "\
    id, name, email, subject, message, is_spam, spam_reason, status, \
    created_at, updated_at";

/// CRUD operations for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Persist a submission together with its spam verdict.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
        verdict: &SpamVerdict,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions \
                (name, email, subject, message, is_spam, spam_reason) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(name)
            .bind(email)
            .bind(subject)
            .bind(message)
            .bind(verdict.is_spam)
            .bind(&verdict.reason)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions with optional status filter, newest first. Spam
    /// is hidden unless `include_spam` is set.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        include_spam: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();

        if !include_spam {
            conditions.push("NOT is_spam".to_string());
        }
        if status.is_some() {
            // Limit and offset occupy $1 and $2.
            conditions.push("status = $3".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions {where_clause} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );

        let mut q = sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(limit)
            .bind(offset);
        if let Some(s) = status {
            q = q.bind(s);
        }
        q.fetch_all(pool).await
    }

    /// Update the triage status. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Aggregate counts for the admin dashboard.
    pub async fn stats(pool: &PgPool) -> Result<ContactStats, sqlx::Error> {
        sqlx::query_as::<_, ContactStats>(
            "SELECT \
                COUNT(*) AS total, \
                COUNT(*) FILTER (WHERE is_spam) AS spam, \
                COUNT(*) FILTER (WHERE status = 'new' AND NOT is_spam) AS unread \
             FROM contact_submissions",
        )
        .fetch_one(pool)
        .await
    }
}
