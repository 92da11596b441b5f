//! Route definitions for managed page content.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes.
///
/// ```text
/// GET    /content/{page}    -> get_page_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/content/{page}", get(content::get_page_content))
}
