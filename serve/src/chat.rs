//! Route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use govschemes::{ChatRequest, ChatResponse, RespondError, StatusResponse};
use tracing::{error, info};

use crate::app::AppState;
use crate::response::ApiError;

const HOME_HTML: &str = "
    <h1>Welcome to GovSchemes Chatbot</h1>
    <p>Use POST /chat endpoint to interact with the bot</p>
    ";

const CHAT_HTML: &str = include_str!("../templates/chat.html");

pub(crate) async fn home() -> Html<&'static str> {
    Html(HOME_HTML)
}

/// Liveness; never touches the upstream service.
pub(crate) async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::working())
}

pub(crate) async fn chat_interface() -> Html<&'static str> {
    Html(CHAT_HTML)
}

/// `POST /chat`: `{"message": ..}` in, `{"response": ..}` out.
pub(crate) async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let message = req.message.unwrap_or_default();
    info!(chars = message.chars().count(), "chat request");

    let reply = state.responder.respond(&message).await.map_err(|e| {
        if matches!(e, RespondError::Generation(_)) {
            error!("error in /chat endpoint: {}", e);
        }
        ApiError::from(e)
    })?;
    Ok(Json(ChatResponse {
        response: reply.text,
    }))
}
