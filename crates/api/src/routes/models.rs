//! Route definitions for the AI model catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::models;
use crate::state::AppState;

/// Model catalog routes.
///
/// ```text
/// GET    /models            -> list_models
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/models", get(models::list_models))
}
