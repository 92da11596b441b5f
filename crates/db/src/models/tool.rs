//! Marketplace tool entity model and DTOs.

use nameforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tools` table: one name-generation tool in the
/// marketplace.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tool {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tool (admin).
#[derive(Debug, Deserialize)]
pub struct CreateTool {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub is_published: bool,
}

/// DTO for updating a tool (admin). Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTool {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

/// Query parameters for the public tool listing.
#[derive(Debug, Deserialize)]
pub struct ToolListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
