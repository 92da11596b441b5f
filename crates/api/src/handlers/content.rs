//! Handler for managed page content.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use nameforge_db::repositories::ContentBlockRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Published content blocks for a page, in display order. An unknown
/// page is simply an empty list; pages come and go with the CMS.
pub async fn get_page_content(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let blocks = ContentBlockRepo::list_published_for_page(&state.pool, &page).await?;
    Ok(Json(DataResponse { data: blocks }))
}
