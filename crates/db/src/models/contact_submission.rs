//! Contact submission entity model and DTOs.

use nameforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Triage statuses for a contact submission.
pub const STATUS_NEW: &str = "new";
pub const STATUS_READ: &str = "read";
pub const STATUS_RESOLVED: &str = "resolved";
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_READ, STATUS_RESOLVED];

/// A row from the `contact_submissions` table. Spam-flagged rows are
/// kept for the admin panel rather than discarded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_spam: bool,
    pub spam_reason: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a submission's triage status (admin).
#[derive(Debug, Deserialize)]
pub struct UpdateContactStatus {
    pub status: String,
}

/// Query parameters for the admin submission listing.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    pub status: Option<String>,
    pub include_spam: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactStats {
    pub total: i64,
    pub spam: i64,
    pub unread: i64,
}
