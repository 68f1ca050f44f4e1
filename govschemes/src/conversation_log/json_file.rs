//! JSON-array file log: load everything, append, rewrite the whole file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;

use super::{ConversationLog, ConversationLogError, ConversationRecord};

/// [`ConversationLog`] stored as one JSON array (4-space indented) in a single file.
///
/// A missing file, or content that is not an array of records, reads as empty; the
/// next append then overwrites it. Appends within one process are serialized; separate
/// processes writing the same file can still lose updates.
pub struct JsonFileConversationLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileConversationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<ConversationRecord>, ConversationLogError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ConversationLogError::Read {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        match serde_json::from_str::<Vec<ConversationRecord>>(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "conversation log is not a JSON array of records ({}); starting from empty",
                    e
                );
                Ok(Vec::new())
            }
        }
    }
}

fn encode(records: &[ConversationRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

#[async_trait]
impl ConversationLog for JsonFileConversationLog {
    async fn append(&self, record: &ConversationRecord) -> Result<(), ConversationLogError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        records.push(record.clone());
        let bytes = encode(&records)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| ConversationLogError::Write {
                path: self.path.display().to_string(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), total = records.len(), "conversation appended");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ConversationRecord>, ConversationLogError> {
        self.load().await
    }
}
