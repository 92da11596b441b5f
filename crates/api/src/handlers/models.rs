//! Handler for the AI model catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use nameforge_db::repositories::AiModelRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// List active models for the generation form's model picker.
pub async fn list_models(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let models = AiModelRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: models }))
}
