//! AI model catalog entity.

use nameforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `ai_models` table: a completion model users may pick
/// for generation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AiModel {
    pub id: DbId,
    pub slug: String,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}
