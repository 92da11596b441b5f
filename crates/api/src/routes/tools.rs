//! Route definitions for the public tool marketplace.
//!
//! Mounted at `/tools` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Tool routes.
///
/// ```text
/// GET    /                  -> list_tools
/// GET    /{slug}            -> get_tool
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tools::list_tools))
        .route("/{slug}", get(tools::get_tool))
}
