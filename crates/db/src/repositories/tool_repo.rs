//! Repository for the `tools` table.

use sqlx::PgPool;

use nameforge_core::types::DbId;

use crate::models::tool::{CreateTool, Tool, UpdateTool};

/// Column list for `tools` queries.
const COLUMNS: &str =
    "id, slug, name, description, category, is_published, created_at, updated_at";

/// Provides CRUD operations for marketplace tools.
pub struct ToolRepo;

impl ToolRepo {
    /// Create a new tool, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateTool) -> Result<Tool, sqlx::Error> {
        let query = format!(
            "INSERT INTO tools (slug, name, description, category, is_published) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tool>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a tool by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tool>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tools WHERE id = $1");
        sqlx::query_as::<_, Tool>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published tool by slug (the public detail page).
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Tool>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tools WHERE slug = $1 AND is_published");
        sqlx::query_as::<_, Tool>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List published tools, optionally filtered by category, newest
    /// first.
    pub async fn list_published(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Tool>, sqlx::Error> {
        let category_clause = if category.is_some() {
            "AND category = $3"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM tools \
             WHERE is_published {category_clause} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );

        let mut q = sqlx::query_as::<_, Tool>(&query).bind(limit).bind(offset);
        if let Some(c) = category {
            q = q.bind(c);
        }
        q.fetch_all(pool).await
    }

    /// Update a tool in place. Absent fields keep their current value.
    /// Returns the updated row if found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTool,
    ) -> Result<Option<Tool>, sqlx::Error> {
        let query = format!(
            "UPDATE tools SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                category = COALESCE($4, category), \
                is_published = COALESCE($5, is_published), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tool>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tool. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tools WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
