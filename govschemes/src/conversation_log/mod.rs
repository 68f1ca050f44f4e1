//! Conversation log: append-only record of every answered question.
//!
//! The responder appends one [`ConversationRecord`] per successful generation. The
//! durable implementation is [`JsonFileConversationLog`] (one JSON array, rewritten
//! wholesale on each append).

mod json_file;

pub use json_file::JsonFileConversationLog;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One logged (input, output) text pair. No id, no timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub user_input: String,
    pub bot_response: String,
}

impl ConversationRecord {
    pub fn new(user_input: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            bot_response: bot_response.into(),
        }
    }
}

/// Error from [`ConversationLog`] operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConversationLogError {
    #[error("read conversation log {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("write conversation log {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("encode conversation log: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Ordered, append-only store of conversation records.
///
/// - `append`: add one record at the end.
/// - `list`: all records in append order.
#[async_trait]
pub trait ConversationLog: Send + Sync {
    async fn append(&self, record: &ConversationRecord) -> Result<(), ConversationLogError>;

    async fn list(&self) -> Result<Vec<ConversationRecord>, ConversationLogError>;
}

/// No-op implementation: append does nothing, list always returns an empty vec.
#[derive(Debug, Default)]
pub struct NoOpConversationLog;

#[async_trait]
impl ConversationLog for NoOpConversationLog {
    async fn append(&self, _record: &ConversationRecord) -> Result<(), ConversationLogError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ConversationRecord>, ConversationLogError> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_append_does_not_error() {
        let log = NoOpConversationLog;
        log.append(&ConversationRecord::new("hi", "hello"))
            .await
            .expect("append should succeed");
    }

    #[tokio::test]
    async fn noop_list_returns_empty() {
        let log = NoOpConversationLog;
        assert!(log.list().await.expect("list should succeed").is_empty());
    }

    #[test]
    fn record_serializes_with_log_file_field_names() {
        let record = ConversationRecord::new("q", "a");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"user_input": "q", "bot_response": "a"})
        );
    }
}
