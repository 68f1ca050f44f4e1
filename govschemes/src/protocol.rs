//! JSON bodies of the HTTP API, shared by the server and the CLI client.
//!
//! - `POST /chat`: [`ChatRequest`] in; [`ChatResponse`] or [`ErrorResponse`] out.
//! - `GET /test`: [`StatusResponse`].

use serde::{Deserialize, Serialize};

/// `POST /chat` body. `message` is optional so a missing key is a client error, not a parse error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Successful `POST /chat` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of every 4xx/5xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /test` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    /// The fixed liveness payload; independent of upstream state.
    pub fn working() -> Self {
        Self {
            status: "success".to_string(),
            message: "API is working correctly".to_string(),
        }
    }
}
