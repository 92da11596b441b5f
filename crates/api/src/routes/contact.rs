//! Route definitions for the public contact form.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact routes.
///
/// ```text
/// POST   /contact           -> submit_contact (rate limited per client IP)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(contact::submit_contact))
}
