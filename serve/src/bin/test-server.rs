//! Mock-backed server: same routes as `govschemes serve`, no Gemini key needed.
//!
//! ```bash
//! cargo run -p serve --features test-server --bin test-server -- 127.0.0.1:8000
//! ```
//!
//! `TEST_SERVER_REPLY` sets the canned answer. Conversations go to
//! `CONVERSATION_LOG_PATH` (default `conversations.json`).

use std::sync::Arc;

use govschemes::{JsonFileConversationLog, MockGeneration, PromptResponder, SystemInstruction};

const DEFAULT_REPLY: &str = "**Overview:** PM-KISAN gives income support to farmer families. \
**Benefits:** Rs. 6000 per year in three installments. \
**Eligibility:** Landholding farmer families.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _guard = config::logging::init_tracing("test-server")?;
    let addr = std::env::args().nth(1);
    let reply = std::env::var("TEST_SERVER_REPLY").unwrap_or_else(|_| DEFAULT_REPLY.to_string());
    let log_path = std::env::var("CONVERSATION_LOG_PATH")
        .unwrap_or_else(|_| "conversations.json".to_string());

    let responder = PromptResponder::new(
        SystemInstruction::default(),
        Arc::new(MockGeneration::with_reply(reply)),
        Arc::new(JsonFileConversationLog::new(log_path)),
    );
    serve::run_serve(addr.as_deref(), Arc::new(responder)).await
}
