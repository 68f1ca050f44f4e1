//! Axum app: shared state, routes and CORS.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use govschemes::PromptResponder;

use crate::chat;

/// Shared state for all handlers; one responder for the whole process.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) responder: Arc<PromptResponder>,
}

/// Builds the router with every route wrapped in permissive CORS.
pub fn router(responder: Arc<PromptResponder>) -> Router {
    Router::new()
        .route("/", get(chat::home))
        .route("/test", get(chat::status))
        .route("/chat", post(chat::chat))
        .route("/chat-interface", get(chat::chat_interface))
        .layer(middleware::from_fn(cors))
        .with_state(AppState { responder })
}

fn add_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

/// Answers preflight with 204 and adds CORS headers to everything else.
async fn cors(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut res = StatusCode::NO_CONTENT.into_response();
        add_cors_headers(res.headers_mut());
        return res;
    }
    let mut res = next.run(req).await;
    add_cors_headers(res.headers_mut());
    res
}
