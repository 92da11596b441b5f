//! Completion backend trait and test double.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::{CompletionClient, CompletionError};

/// Seam between HTTP handlers and the completion API.
///
/// Production uses [`CompletionClient`]; tests inject a [`MockBackend`]
/// with canned responses.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError>;
}

#[async_trait::async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        CompletionClient::complete(self, model, prompt).await
    }
}

/// Scripted backend for tests: pops queued results in order, and keeps
/// the prompts it received so tests can assert on them.
#[derive(Default)]
pub struct MockBackend {
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion.
    pub fn push_text(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn push_error(&self, err: CompletionError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, _model: &str, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}
