//! Repository for the `saved_names` table.

use sqlx::PgPool;

use nameforge_core::types::DbId;

use crate::models::saved_name::{CreateSavedName, SavedName};

/// Column list for `saved_names` queries.
const COLUMNS: &str = "id, user_id, tool_slug, name, is_favorite, created_at";

/// CRUD operations for a user's saved names. Every query is scoped by
/// `user_id`; rows belonging to other users are invisible.
pub struct SavedNameRepo;

impl SavedNameRepo {
    /// Save a name for a user, returning the full row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSavedName,
    ) -> Result<SavedName, sqlx::Error> {
        let query = format!(
            "INSERT INTO saved_names (user_id, tool_slug, name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedName>(&query)
            .bind(user_id)
            .bind(&input.tool_slug)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List a user's saved names, newest first, optionally favorites
    /// only.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        favorites_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SavedName>, sqlx::Error> {
        let favorite_clause = if favorites_only {
            "AND is_favorite"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM saved_names \
             WHERE user_id = $1 {favorite_clause} \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, SavedName>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Set the favorite flag on one of the user's names. Returns the
    /// updated row if the name exists and belongs to the user.
    pub async fn set_favorite(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        is_favorite: bool,
    ) -> Result<Option<SavedName>, sqlx::Error> {
        let query = format!(
            "UPDATE saved_names SET is_favorite = $3 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedName>(&query)
            .bind(id)
            .bind(user_id)
            .bind(is_favorite)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's names. Returns whether a row was
    /// removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_names WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
