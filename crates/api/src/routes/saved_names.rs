//! Route definitions for saved names.
//!
//! Mounted at `/saved-names` by `api_routes()`. All routes require
//! authentication via the `AuthUser` extractor.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::saved_names;
use crate::state::AppState;

/// Saved-name routes.
///
/// ```text
/// GET    /                  -> list_saved_names
/// POST   /                  -> save_name
/// DELETE /{id}              -> delete_saved_name
/// PATCH  /{id}/favorite     -> set_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(saved_names::list_saved_names).post(saved_names::save_name),
        )
        .route("/{id}", delete(saved_names::delete_saved_name))
        .route("/{id}/favorite", patch(saved_names::set_favorite))
}
