//! Route definitions for the admin panel.
//!
//! Mounted at `/admin` by `api_routes()`. Every handler enforces the
//! admin role via the `RequireAdmin` extractor.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes.
///
/// ```text
/// GET    /contact               -> list_contact_submissions
/// GET    /contact/stats         -> contact_stats
/// GET    /contact/{id}          -> get_contact_submission
/// PUT    /contact/{id}/status   -> update_contact_status
/// POST   /tools                 -> create_tool
/// PUT    /tools/{id}            -> update_tool
/// DELETE /tools/{id}            -> delete_tool
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", get(admin::list_contact_submissions))
        .route("/contact/stats", get(admin::contact_stats))
        .route("/contact/{id}", get(admin::get_contact_submission))
        .route("/contact/{id}/status", put(admin::update_contact_status))
        .route("/tools", post(admin::create_tool))
        .route(
            "/tools/{id}",
            put(admin::update_tool).delete(admin::delete_tool),
        )
}
