//! HTTP API for the govschemes prompt responder (axum).
//!
//! Routes: `GET /` help page, `GET /test` liveness, `POST /chat`, `GET /chat-interface`.
//! Default address `127.0.0.1:8000`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`router`].

mod app;
mod chat;
mod response;

use std::future::Future;
use std::sync::Arc;

use govschemes::PromptResponder;
use tokio::net::TcpListener;
use tracing::info;

pub use app::router;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Serves on an existing listener until `shutdown` completes. Tests bind `127.0.0.1:0`
/// and pass the listener in.
pub async fn run_serve_on_listener<F>(
    listener: TcpListener,
    responder: Arc<PromptResponder>,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("govschemes API listening on http://{}", addr);
    info!("endpoints: GET / (help), GET /test, POST /chat, GET /chat-interface");

    axum::serve(listener, router(responder))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Binds `addr` (default `127.0.0.1:8000`) and serves until Ctrl-C.
pub async fn run_serve(
    addr: Option<&str>,
    responder: Arc<PromptResponder>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(DEFAULT_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, responder, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("ctrl-c handler failed: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await
}
