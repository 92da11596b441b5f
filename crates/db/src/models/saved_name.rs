//! Saved name entity model and DTOs.

use nameforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `saved_names` table: a name a user kept from a
/// generation run.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SavedName {
    pub id: DbId,
    pub user_id: DbId,
    pub tool_slug: Option<String>,
    pub name: String,
    pub is_favorite: bool,
    pub created_at: Timestamp,
}

/// DTO for saving a name.
#[derive(Debug, Deserialize)]
pub struct CreateSavedName {
    pub name: String,
    pub tool_slug: Option<String>,
}

/// DTO for toggling the favorite flag.
#[derive(Debug, Deserialize)]
pub struct SetFavorite {
    pub is_favorite: bool,
}

/// Query parameters for listing a user's saved names.
#[derive(Debug, Deserialize)]
pub struct SavedNameListParams {
    pub favorites_only: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
