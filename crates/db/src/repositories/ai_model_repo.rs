//! Repository for the `ai_models` table.

use sqlx::PgPool;

use crate::models::ai_model::AiModel;

/// Column list for `ai_models` queries.
const COLUMNS: &str = "id, slug, display_name, is_active, created_at";

/// Read access to the AI model catalog.
pub struct AiModelRepo;

impl AiModelRepo {
    /// List active models, oldest first (stable ordering for pickers).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<AiModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ai_models WHERE is_active ORDER BY id");
        sqlx::query_as::<_, AiModel>(&query).fetch_all(pool).await
    }

    /// Find an active model by slug.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<AiModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ai_models WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, AiModel>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
