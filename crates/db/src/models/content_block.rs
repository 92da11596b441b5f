//! CMS content block entity.

use nameforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `content_blocks` table: one ordered block of managed
/// copy on a public page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentBlock {
    pub id: DbId,
    pub page: String,
    pub section: String,
    pub body: String,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
