pub mod admin;
pub mod contact;
pub mod content;
pub mod generation;
pub mod health;
pub mod models;
pub mod saved_names;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate                         generate names (public)
///
/// /tools                            list published tools (public)
/// /tools/{slug}                     tool detail (public)
///
/// /models                           active model catalog (public)
/// /content/{page}                   page content blocks (public)
///
/// /contact                          submit contact form (public, rate limited)
///
/// /saved-names                      list, save (requires auth)
/// /saved-names/{id}                 delete
/// /saved-names/{id}/favorite        toggle favorite (PATCH)
///
/// /admin/contact                    list submissions (admin only)
/// /admin/contact/stats              aggregate counts
/// /admin/contact/{id}               submission detail
/// /admin/contact/{id}/status        triage update (PUT)
/// /admin/tools                      create (POST)
/// /admin/tools/{id}                 update (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(generation::router())
        .nest("/tools", tools::router())
        .merge(models::router())
        .merge(content::router())
        .merge(contact::router())
        .nest("/saved-names", saved_names::router())
        .nest("/admin", admin::router())
}
