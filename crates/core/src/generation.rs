//! Generation-request validation and shared pagination clamps.

use crate::error::CoreError;
use crate::prompt::ParamValue;

/// Smallest number of names a single request may ask for.
pub const MIN_COUNT: u32 = 1;
/// Largest number of names a single request may ask for.
pub const MAX_COUNT: u32 = 50;

/// A validated name-generation request.
///
/// `params` preserves form-declaration order because clause order in the
/// constructed prompt follows it.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub category: String,
    pub count: u32,
    pub params: Vec<(String, ParamValue)>,
}

/// Validate category and count before any prompt is built or any
/// network call is made. Failures name the violated constraint.
pub fn validate_request(category: &str, count: u32) -> Result<(), CoreError> {
    if category.trim().is_empty() {
        return Err(CoreError::Validation(
            "Category must not be empty".to_string(),
        ));
    }
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(CoreError::Validation(format!(
            "Count must be between {MIN_COUNT} and {MAX_COUNT} (got {count})"
        )));
    }
    Ok(())
}

/// Clamp a user-provided limit into `1..=max`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
