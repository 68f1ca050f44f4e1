//! How a question gets answered by the `govschemes` CLI.
//!
//! - **LocalBackend**: build the responder in-process from the environment (`--local`).
//! - **RemoteBackend**: `POST /chat` on a running `govschemes serve` (default).
//!
//! `main.rs` depends only on [`AskBackend`], so switching is a one-line decision.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;
use govschemes::{RespondError, SettingsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AskError {
    /// Server answered with a non-2xx status and an `{"error": ..}` body.
    #[error("server returned {status}: {error}")]
    Rejected { status: u16, error: String },
    #[error("request to {url} failed: {cause}")]
    Transport { url: String, cause: String },
    #[error(transparent)]
    Respond(#[from] RespondError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[async_trait]
pub trait AskBackend: Send + Sync {
    /// Answers one question; the returned text is what `POST /chat` would put in `response`.
    async fn ask(&self, message: &str) -> Result<String, AskError>;
}
