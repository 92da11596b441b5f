//! Handler for the name-generation endpoint.
//!
//! Validates the request, resolves the model, builds the prompt, makes
//! a single completion call (no automatic retry), and parses the
//! response into discrete names. Each failure mode maps to a distinct
//! user-visible message; see `error.rs`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use nameforge_core::error::CoreError;
use nameforge_core::generation::validate_request;
use nameforge_core::parser::parse_names;
use nameforge_core::prompt::{construct_prompt, ParamValue};
use nameforge_db::repositories::AiModelRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /generate`.
///
/// `params` is an open-ended map of form fields; values must be JSON
/// scalars. Key order is preserved and drives prompt clause order.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub category: String,
    pub count: u32,
    /// Model slug; the configured default is used when absent.
    pub model: Option<String>,
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// Response payload for a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub names: Vec<String>,
    /// The model slug that produced the names.
    pub model: String,
    /// Size of the submitted prompt, for client-side debugging.
    pub prompt_chars: usize,
}

// ---------------------------------------------------------------------------
// POST /generate
// ---------------------------------------------------------------------------

/// Generate names for a category with free-form parameters.
pub async fn generate_names(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    validate_request(&input.category, input.count)?;

    let params = typed_params(&input.params)?;

    let model = match &input.model {
        Some(slug) => AiModelRepo::find_active_by_slug(&state.pool, slug)
            .await?
            .map(|m| m.slug)
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!("Unknown model: {slug}")))
            })?,
        None => state.config.default_model.clone(),
    };

    let prompt = construct_prompt(&input.category, input.count, &params);
    let prompt_chars = prompt.chars().count();

    let raw = state.completion.complete(&model, &prompt).await?;

    let names = parse_names(&raw);
    if names.is_empty() {
        tracing::warn!(model, "Completion response yielded no parseable names");
        return Err(AppError::Core(CoreError::Upstream(
            "Could not parse names from the model response. Please try again.".to_string(),
        )));
    }

    tracing::info!(
        model,
        category = %input.category,
        requested = input.count,
        produced = names.len(),
        "Generated names",
    );

    Ok(Json(DataResponse {
        data: GenerateResponse {
            names,
            model,
            prompt_chars,
        },
    }))
}

/// Re-type the JSON parameter map into ordered `(name, value)` pairs.
///
/// Non-scalar values are rejected with a message naming the field.
fn typed_params(
    map: &serde_json::Map<String, serde_json::Value>,
) -> Result<Vec<(String, ParamValue)>, AppError> {
    map.iter()
        .map(|(key, value)| {
            ParamValue::from_json(value)
                .map(|v| (key.clone(), v))
                .ok_or_else(|| {
                    AppError::Core(CoreError::Validation(format!(
                        "Parameter '{key}' must be a string, number, or boolean"
                    )))
                })
        })
        .collect()
}
