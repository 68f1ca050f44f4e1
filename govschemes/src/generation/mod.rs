//! Generation service abstraction: prompt in, answer text out.
//!
//! [`PromptResponder`](crate::PromptResponder) depends on a [`GenerationService`]; this module
//! defines the trait, the Gemini `generateContent` client and a mock used by tests and the
//! test server.

mod gemini;
mod mock;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use mock::MockGeneration;

use async_trait::async_trait;

/// Failure of one upstream generation call. No retry is attempted by any implementation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GenerationError {
    /// Network failure, timeout, or an unreadable response body.
    #[error("transport error: {0}")]
    Transport(String),
    /// Upstream answered with a non-success status (bad key, quota, invalid model, ...).
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    /// Upstream answered 2xx but without any candidate text (e.g. blocked prompt).
    #[error("empty response: {0}")]
    EmptyResponse(String),
    /// The client could not be constructed.
    #[error("client configuration error: {0}")]
    Config(String),
}

/// External text-generation service: given the full prompt, returns answer text.
///
/// Implementations: [`GeminiClient`] (real API), [`MockGeneration`] (fixed reply or failure).
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
