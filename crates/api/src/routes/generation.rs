//! Route definitions for name generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Generation routes.
///
/// ```text
/// POST   /generate          -> generate_names
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generation::generate_names))
}
