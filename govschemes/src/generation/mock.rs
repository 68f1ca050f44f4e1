//! Mock generation service: fixed reply or fixed failure, records every prompt it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerationError, GenerationService};

enum Outcome {
    Reply(String),
    Fail(String),
}

/// Mock [`GenerationService`]. Used by unit tests, e2e tests and the `test-server` binary.
pub struct MockGeneration {
    outcome: Outcome,
    prompts: Mutex<Vec<String>>,
}

impl MockGeneration {
    /// Always answers with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Reply(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with [`GenerationError::Transport`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GenerationService for MockGeneration {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Fail(message) => Err(GenerationError::Transport(message.clone())),
        }
    }
}
