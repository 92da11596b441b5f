//! Repository for the `content_blocks` table.

use sqlx::PgPool;

use crate::models::content_block::ContentBlock;

/// Column list for `content_blocks` queries.
const COLUMNS: &str =
    "id, page, section, body, sort_order, is_published, created_at, updated_at";

/// Read access to managed page content.
pub struct ContentBlockRepo;

impl ContentBlockRepo {
    /// Published blocks for a page, in display order.
    pub async fn list_published_for_page(
        pool: &PgPool,
        page: &str,
    ) -> Result<Vec<ContentBlock>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_blocks \
             WHERE page = $1 AND is_published \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, ContentBlock>(&query)
            .bind(page)
            .fetch_all(pool)
            .await
    }
}
