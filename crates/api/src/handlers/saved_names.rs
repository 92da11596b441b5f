//! Handlers for a user's saved names. All endpoints require
//! authentication, and every query is scoped to the caller's user id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nameforge_core::error::CoreError;
use nameforge_core::generation::{clamp_limit, clamp_offset};
use nameforge_core::parser::MAX_NAME_LENGTH;
use nameforge_core::types::DbId;
use nameforge_db::models::saved_name::{CreateSavedName, SavedNameListParams, SetFavorite};
use nameforge_db::repositories::SavedNameRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /saved-names
// ---------------------------------------------------------------------------

/// Save a generated name for the authenticated user.
pub async fn save_name(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSavedName>,
) -> AppResult<impl IntoResponse> {
    let trimmed = input.name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".to_string(),
        )));
    }
    if trimmed.chars().count() >= MAX_NAME_LENGTH {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Name must be under {MAX_NAME_LENGTH} characters"
        ))));
    }

    let saved = SavedNameRepo::create(
        &state.pool,
        auth.user_id,
        &CreateSavedName {
            name: trimmed.to_string(),
            tool_slug: input.tool_slug.clone(),
        },
    )
    .await?;

    tracing::info!(saved_name_id = saved.id, user_id = auth.user_id, "Name saved");

    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

// ---------------------------------------------------------------------------
// GET /saved-names
// ---------------------------------------------------------------------------

/// List the authenticated user's saved names, newest first.
pub async fn list_saved_names(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SavedNameListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let names = SavedNameRepo::list_for_user(
        &state.pool,
        auth.user_id,
        params.favorites_only.unwrap_or(false),
        limit,
        offset,
    )
    .await?;

    Ok(Json(DataResponse { data: names }))
}

// ---------------------------------------------------------------------------
// PATCH /saved-names/:id/favorite
// ---------------------------------------------------------------------------

/// Set or clear the favorite flag on one of the user's names.
pub async fn set_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetFavorite>,
) -> AppResult<impl IntoResponse> {
    let updated = SavedNameRepo::set_favorite(&state.pool, auth.user_id, id, input.is_favorite)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SavedName",
            id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /saved-names/:id
// ---------------------------------------------------------------------------

/// Delete one of the user's names.
pub async fn delete_saved_name(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SavedNameRepo::delete(&state.pool, auth.user_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SavedName",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
