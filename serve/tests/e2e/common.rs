//! Shared helpers for e2e tests: spawn a server backed by [`MockGeneration`] and a JSON
//! log in a temp dir. Run with `--nocapture` to see `[e2e] received: ...` lines.

use std::path::PathBuf;
use std::sync::Arc;

use govschemes::{
    ConversationLog, ConversationRecord, JsonFileConversationLog, MockGeneration,
    PromptResponder, SystemInstruction,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct TestServer {
    pub base_url: String,
    pub generator: Arc<MockGeneration>,
    log_path: PathBuf,
    shutdown: Option<oneshot::Sender<()>>,
    _dir: tempfile::TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Records currently in the conversation log file.
    pub async fn records(&self) -> Vec<ConversationRecord> {
        JsonFileConversationLog::new(&self.log_path)
            .list()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Binds a random port and serves until the returned handle is dropped.
pub async fn spawn_server(generator: MockGeneration) -> TestServer {
    spawn_server_logging_to(generator, "conversations.json").await
}

/// Like [`spawn_server`], with the log at `relative` inside the temp dir.
/// A path under a missing directory makes every log write fail.
pub async fn spawn_server_logging_to(generator: MockGeneration, relative: &str) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join(relative);
    let generator = Arc::new(generator);
    let responder = PromptResponder::new(
        SystemInstruction::default(),
        generator.clone(),
        Arc::new(JsonFileConversationLog::new(&log_path)),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(serve::run_serve_on_listener(
        listener,
        Arc::new(responder),
        async move {
            let _ = rx.await;
        },
    ));

    TestServer {
        base_url: format!("http://{}", addr),
        generator,
        log_path,
        shutdown: Some(tx),
        _dir: dir,
    }
}

/// Reads status and JSON body, logging the raw text.
pub async fn json_body(res: reqwest::Response) -> (reqwest::StatusCode, serde_json::Value) {
    let status = res.status();
    let text = res.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, serde_json::from_str(&text).unwrap())
}
