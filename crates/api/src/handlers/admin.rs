//! Admin handlers: contact-submission triage and analytics, tool
//! management. Every endpoint requires the admin role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nameforge_core::error::CoreError;
use nameforge_core::generation::{clamp_limit, clamp_offset};
use nameforge_core::types::DbId;
use nameforge_db::models::contact_submission::{
    ContactListParams, UpdateContactStatus, VALID_STATUSES,
};
use nameforge_db::models::tool::{CreateTool, UpdateTool};
use nameforge_db::repositories::{ContactRepo, ToolRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /admin/contact
// ---------------------------------------------------------------------------

/// List contact submissions with optional status filter. Spam is
/// hidden unless `include_spam=true`.
pub async fn list_contact_submissions(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref s) = params.status {
        validate_status(s)?;
    }

    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let submissions = ContactRepo::list_filtered(
        &state.pool,
        params.status.as_deref(),
        params.include_spam.unwrap_or(false),
        limit,
        offset,
    )
    .await?;

    Ok(Json(DataResponse { data: submissions }))
}

// ---------------------------------------------------------------------------
// GET /admin/contact/stats
// ---------------------------------------------------------------------------

/// Aggregate submission counts for the dashboard.
pub async fn contact_stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = ContactRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

// ---------------------------------------------------------------------------
// GET /admin/contact/:id
// ---------------------------------------------------------------------------

/// Get a single contact submission.
pub async fn get_contact_submission(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactSubmission",
            id,
        }))?;

    Ok(Json(DataResponse { data: submission }))
}

// ---------------------------------------------------------------------------
// PUT /admin/contact/:id/status
// ---------------------------------------------------------------------------

/// Update the triage status of a submission.
pub async fn update_contact_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactStatus>,
) -> AppResult<impl IntoResponse> {
    validate_status(&input.status)?;

    let updated = ContactRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactSubmission",
            id,
        }))?;

    tracing::info!(
        submission_id = id,
        admin_id = admin.user_id,
        status = %input.status,
        "Contact submission status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

fn validate_status(status: &str) -> Result<(), AppError> {
    if !VALID_STATUSES.contains(&status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid status '{status}'. Valid statuses: {}",
            VALID_STATUSES.join(", ")
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// POST /admin/tools
// ---------------------------------------------------------------------------

/// Create a marketplace tool.
pub async fn create_tool(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTool>,
) -> AppResult<impl IntoResponse> {
    if input.slug.trim().is_empty() || input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Tool slug and name must not be empty".to_string(),
        )));
    }

    let tool = ToolRepo::create(&state.pool, &input).await?;

    tracing::info!(tool_id = tool.id, admin_id = admin.user_id, slug = %tool.slug, "Tool created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tool })))
}

// ---------------------------------------------------------------------------
// PUT /admin/tools/:id
// ---------------------------------------------------------------------------

/// Update a tool. Absent fields are left unchanged.
pub async fn update_tool(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTool>,
) -> AppResult<impl IntoResponse> {
    let updated = ToolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tool", id }))?;

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/tools/:id
// ---------------------------------------------------------------------------

/// Delete a tool.
pub async fn delete_tool(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ToolRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tool", id }));
    }

    tracing::info!(tool_id = id, admin_id = admin.user_id, "Tool deleted");

    Ok(StatusCode::NO_CONTENT)
}
