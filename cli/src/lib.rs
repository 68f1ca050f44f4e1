//! Library side of the `govschemes` binary: backends, address resolution and the smoke check.

mod backend;

use std::io::Write;

pub use backend::{AskBackend, AskError, LocalBackend, RemoteBackend};

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";
pub const URL_ENV: &str = "GOVSCHEMES_URL";
pub const ADDR_ENV: &str = "SERVE_ADDR";

/// Question sent by [`check`].
pub const CHECK_QUESTION: &str = "Tell me about PM Kisan Scheme";

/// Flag value, then the env value (if non-blank), then `default`.
pub fn resolve(flag: Option<&str>, env_value: Option<String>, default: &str) -> String {
    flag.map(str::to_string)
        .or_else(|| env_value.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| default.to_string())
}

/// Smoke test of a running server: `GET /test`, then `POST /chat` with [`CHECK_QUESTION`].
///
/// Both JSON bodies are written to `out`. Fails on the first non-2xx status.
pub async fn check<W: Write>(remote: &RemoteBackend, out: &mut W) -> Result<(), AskError> {
    let (status, body) = remote.status().await?;
    report(out, "GET /test", status, &body);
    ensure_success(status, &body)?;

    let (status, body) = remote.chat(CHECK_QUESTION).await?;
    report(out, "POST /chat", status, &body);
    ensure_success(status, &body)
}

fn report<W: Write>(out: &mut W, what: &str, status: u16, body: &serde_json::Value) {
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    let _ = writeln!(out, "{} -> {}\n{}", what, status, pretty);
}

fn ensure_success(status: u16, body: &serde_json::Value) -> Result<(), AskError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(AskError::Rejected {
        status,
        error: body
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
    })
}
