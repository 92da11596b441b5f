//! Handlers for the public tool marketplace.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use nameforge_core::generation::{clamp_limit, clamp_offset};
use nameforge_db::models::tool::ToolListParams;
use nameforge_db::repositories::ToolRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /tools
// ---------------------------------------------------------------------------

/// List published tools, optionally filtered by category.
pub async fn list_tools(
    State(state): State<AppState>,
    Query(params): Query<ToolListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let tools =
        ToolRepo::list_published(&state.pool, params.category.as_deref(), limit, offset).await?;

    Ok(Json(DataResponse { data: tools }))
}

// ---------------------------------------------------------------------------
// GET /tools/:slug
// ---------------------------------------------------------------------------

/// Get a single published tool by slug.
pub async fn get_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let tool = ToolRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No such tool: {slug}")))?;

    Ok(Json(DataResponse { data: tool }))
}
