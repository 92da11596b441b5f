//! Chat-completion client for the name-generation pipeline.
//!
//! Wraps a single OpenAI-style chat-completion endpoint with [`reqwest`]
//! behind the [`CompletionBackend`] trait so handlers and tests can swap
//! the HTTP client for a canned implementation.

mod backend;
mod client;

pub use backend::{CompletionBackend, MockBackend};
pub use client::{CompletionClient, CompletionError};
