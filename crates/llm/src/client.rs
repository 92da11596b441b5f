//! HTTP client for the chat-completion API.

use serde::{Deserialize, Serialize};

/// Sampling temperature for name generation; high enough to vary output
/// across calls without losing coherence.
const TEMPERATURE: f64 = 0.8;

/// Enough for 50 names plus the decoration models add despite
/// instructions.
const MAX_TOKENS: u32 = 1000;

/// Errors from the completion API layer.
///
/// A 429 gets its own variant because callers surface it as a distinct
/// "model busy, try another one" message, unlike other failures.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint rejected the call with 429.
    #[error("Completion API is rate limited")]
    RateLimited,

    /// Any other non-2xx status.
    #[error("Completion API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response that carried no usable text.
    #[error("Completion API returned an empty response")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// HTTP client for a chat-completion endpoint.
pub struct CompletionClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl CompletionClient {
    /// Create a client for the given endpoint.
    ///
    /// * `api_url` - Full URL of the chat-completions endpoint, e.g.
    ///   `https://api.example.com/v1/chat/completions`.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Send the prompt as a single user-role message and return the raw
    /// completion text. One attempt, no automatic retry; callers surface
    /// failures to the end user and let them retry manually.
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            tracing::warn!(model, "Completion API rate limited");
            return Err(CompletionError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(model, status = status.as_u16(), "Completion API error");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        Ok(content)
    }
}
