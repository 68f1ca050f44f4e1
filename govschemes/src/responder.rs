//! Prompt responder: validate input, prompt the generation service, clean, log, return.

use std::sync::Arc;

use crate::cleanup::clean_response;
use crate::conversation_log::{ConversationLog, ConversationRecord};
use crate::generation::{GenerationError, GenerationService};
use crate::instruction::SystemInstruction;

/// Number of prompt characters shown in debug traces.
const PROMPT_PREVIEW_CHARS: usize = 100;

/// Why a question produced no answer.
#[derive(Debug, thiserror::Error)]
pub enum RespondError {
    /// Empty or whitespace-only input; nothing was sent upstream.
    #[error("No message provided")]
    EmptyInput,
    /// The generation service failed; nothing was logged.
    #[error("Error generating response: {0}")]
    Generation(#[from] GenerationError),
}

/// Result of writing the conversation record for a delivered answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogOutcome {
    Written,
    Failed(String),
}

/// A delivered answer and whether it reached the conversation log.
#[derive(Clone, Debug)]
pub struct Reply {
    pub text: String,
    pub log: LogOutcome,
}

/// Answers welfare-scheme questions through a [`GenerationService`].
///
/// Built once with its collaborators and shared (`Arc`) by every request; holds no
/// per-request state.
pub struct PromptResponder {
    instruction: SystemInstruction,
    generator: Arc<dyn GenerationService>,
    log: Arc<dyn ConversationLog>,
    clean: bool,
}

impl PromptResponder {
    pub fn new(
        instruction: SystemInstruction,
        generator: Arc<dyn GenerationService>,
        log: Arc<dyn ConversationLog>,
    ) -> Self {
        Self {
            instruction,
            generator,
            log,
            clean: true,
        }
    }

    /// Enables or disables [`clean_response`] on generated text (enabled by default).
    pub fn with_cleaning(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn instruction(&self) -> &SystemInstruction {
        &self.instruction
    }

    /// Answers one question.
    ///
    /// Blank input is rejected before any upstream call. Upstream failure is returned as
    /// [`RespondError::Generation`], never as answer text. A failed log write is reported
    /// in [`Reply::log`] and does not withhold the answer.
    pub async fn respond(&self, user_input: &str) -> Result<Reply, RespondError> {
        if user_input.trim().is_empty() {
            return Err(RespondError::EmptyInput);
        }
        if let Some(topic) = self.instruction.mentioned_restricted_topic(user_input) {
            tracing::debug!(topic, "question mentions a restricted topic");
        }

        let prompt = self.instruction.build_prompt(user_input);
        tracing::debug!(
            "prompt: {}...",
            prompt.chars().take(PROMPT_PREVIEW_CHARS).collect::<String>()
        );
        let raw = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!("error generating response: {}", e);
            RespondError::Generation(e)
        })?;
        let text = if self.clean {
            clean_response(&raw)
        } else {
            raw
        };

        let record = ConversationRecord::new(user_input, text.clone());
        let log = match self.log.append(&record).await {
            Ok(()) => LogOutcome::Written,
            Err(e) => {
                tracing::warn!("error saving conversation: {}", e);
                LogOutcome::Failed(e.to_string())
            }
        };
        Ok(Reply { text, log })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation_log::{ConversationLogError, JsonFileConversationLog};
    use crate::generation::MockGeneration;
    use async_trait::async_trait;

    struct BrokenLog;

    #[async_trait]
    impl ConversationLog for BrokenLog {
        async fn append(&self, _record: &ConversationRecord) -> Result<(), ConversationLogError> {
            Err(ConversationLogError::Write {
                path: "broken.json".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        async fn list(&self) -> Result<Vec<ConversationRecord>, ConversationLogError> {
            Ok(vec![])
        }
    }

    fn responder_with(
        generator: Arc<MockGeneration>,
        log: Arc<dyn ConversationLog>,
    ) -> PromptResponder {
        PromptResponder::new(
            SystemInstruction::new("Answer scheme questions.", vec!["election".to_string()]),
            generator,
            log,
        )
    }

    #[tokio::test]
    async fn successful_answer_appends_exactly_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(JsonFileConversationLog::new(dir.path().join("c.json")));
        let generator = Arc::new(MockGeneration::with_reply("PM Kisan pays Rs. 6000 a year."));
        let responder = responder_with(generator.clone(), log.clone());

        let reply = responder
            .respond("Tell me about PM Kisan Scheme")
            .await
            .unwrap();
        assert_eq!(reply.text, "PM Kisan pays Rs. 6000 a year.");
        assert_eq!(reply.log, LogOutcome::Written);

        let records = log.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_input, "Tell me about PM Kisan Scheme");
        assert_eq!(records[0].bot_response, reply.text);

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("\nAnswer scheme questions.\n"));
        assert!(prompts[0].contains("User Query: Tell me about PM Kisan Scheme\n"));
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_upstream_call() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(JsonFileConversationLog::new(dir.path().join("c.json")));
        let generator = Arc::new(MockGeneration::with_reply("unused"));
        let responder = responder_with(generator.clone(), log.clone());

        for input in ["", "   ", "\n\t"] {
            let err = responder.respond(input).await.unwrap_err();
            assert!(matches!(err, RespondError::EmptyInput));
        }
        assert!(generator.prompts().is_empty());
        assert!(log.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_an_error_not_answer_text() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(JsonFileConversationLog::new(dir.path().join("c.json")));
        let responder = responder_with(Arc::new(MockGeneration::failing("quota exceeded")), log.clone());

        let err = responder.respond("Tell me about PMAY").await.unwrap_err();
        assert!(matches!(err, RespondError::Generation(_)));
        assert_eq!(
            err.to_string(),
            "Error generating response: transport error: quota exceeded"
        );
        assert!(log.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn log_failure_still_delivers_answer() {
        let responder = responder_with(
            Arc::new(MockGeneration::with_reply("Answer.")),
            Arc::new(BrokenLog),
        );
        let reply = responder.respond("Ayushman Bharat?").await.unwrap();
        assert_eq!(reply.text, "Answer.");
        assert!(matches!(reply.log, LogOutcome::Failed(ref m) if m.contains("read-only")));
    }

    #[tokio::test]
    async fn cleaning_can_be_disabled() {
        let raw = "**Benefits:** Income support. Paid in installments.";
        let log: Arc<dyn ConversationLog> = Arc::new(crate::NoOpConversationLog);

        let cleaned = responder_with(Arc::new(MockGeneration::with_reply(raw)), log.clone());
        assert_eq!(
            cleaned.respond("q").await.unwrap().text,
            "Benefits: Income support.\nPaid in installments."
        );

        let untouched = responder_with(Arc::new(MockGeneration::with_reply(raw)), log)
            .with_cleaning(false);
        assert_eq!(untouched.respond("q").await.unwrap().text, raw);
    }

    #[tokio::test]
    async fn restricted_topic_is_not_enforced() {
        let responder = responder_with(
            Arc::new(MockGeneration::with_reply("I can only discuss schemes.")),
            Arc::new(crate::NoOpConversationLog),
        );
        let reply = responder.respond("Who will win the election?").await.unwrap();
        assert_eq!(reply.text, "I can only discuss schemes.");
    }
}
