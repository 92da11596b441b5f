//! Handler for the public contact form.
//!
//! Submissions are rate limited per client address, screened by the
//! spam heuristics, and persisted either way -- flagged submissions are
//! kept for the admin panel but acknowledged to the sender exactly like
//! clean ones, so senders cannot probe the filter.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use nameforge_core::error::CoreError;
use nameforge_core::rate_limit::RateLimitAction;
use nameforge_core::spam::{detect_spam, SpamInput};
use nameforge_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::client_ip::ClientIp;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,
    #[validate(length(min = 10, max = 5000, message = "Message must be 10-5000 characters"))]
    pub message: String,
}

/// Acknowledgement returned for every accepted submission.
#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Submit a contact-form message.
pub async fn submit_contact(
    ClientIp(ip): ClientIp,
    State(state): State<AppState>,
    Json(input): Json<ContactForm>,
) -> AppResult<impl IntoResponse> {
    // Rate limit before doing any work. Validation failures below do
    // not count against the limit; accepted submissions do.
    let status = state
        .rate_limiter
        .check_limit(&ip, RateLimitAction::Contact)
        .await;
    if !status.is_allowed {
        return Err(AppError::Core(CoreError::RateLimited {
            retry_after_seconds: status.remaining_seconds,
        }));
    }

    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(flatten_validation_errors(&e))))?;

    let verdict = detect_spam(&SpamInput {
        name: &input.name,
        email: &input.email,
        subject: &input.subject,
        message: &input.message,
    });

    let submission = ContactRepo::create(
        &state.pool,
        &input.name,
        &input.email,
        &input.subject,
        &input.message,
        &verdict,
    )
    .await?;

    // Every accepted submission consumes an attempt; three in the
    // window locks the sender out with exponential backoff.
    state
        .rate_limiter
        .record_failure(&ip, RateLimitAction::Contact)
        .await;

    if verdict.is_spam {
        tracing::info!(
            submission_id = submission.id,
            reason = verdict.reason.as_deref().unwrap_or(""),
            "Contact submission flagged as spam",
        );
    } else {
        tracing::info!(submission_id = submission.id, "Contact submission received");
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ContactAck {
                message: "Thanks for reaching out. We'll get back to you soon.",
            },
        }),
    ))
}

/// Collapse validator output into one message naming the first violated
/// constraint.
fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"))
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}
