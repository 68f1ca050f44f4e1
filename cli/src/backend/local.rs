//! LocalBackend: answer in-process with a [`PromptResponder`].

use std::sync::Arc;

use async_trait::async_trait;
use govschemes::{LogOutcome, PromptResponder, ResponderSettings};

use super::{AskBackend, AskError};

pub struct LocalBackend {
    responder: Arc<PromptResponder>,
}

impl LocalBackend {
    pub fn new(responder: Arc<PromptResponder>) -> Self {
        Self { responder }
    }

    /// Gemini-backed responder from `GOOGLE_API_KEY` and friends.
    pub fn from_env() -> Result<Self, AskError> {
        let responder = ResponderSettings::from_env()?.build_responder()?;
        Ok(Self::new(Arc::new(responder)))
    }
}

#[async_trait]
impl AskBackend for LocalBackend {
    async fn ask(&self, message: &str) -> Result<String, AskError> {
        let reply = self.responder.respond(message).await?;
        if let LogOutcome::Failed(cause) = &reply.log {
            tracing::warn!("conversation not saved: {}", cause);
        }
        Ok(reply.text)
    }
}
