//! Domain logic for the Nameforge backend.
//!
//! Pure, storage-agnostic building blocks: the rate limiter and its
//! store trait, the spam heuristics, the prompt constructor, the
//! response parser, and generation-request validation. Nothing in this
//! crate touches HTTP or Postgres directly.

pub mod error;
pub mod generation;
pub mod parser;
pub mod prompt;
pub mod rate_limit;
pub mod spam;
pub mod types;
