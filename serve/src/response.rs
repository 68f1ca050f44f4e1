//! Error responses: `{"error": ...}` with a status chosen by who is at fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use govschemes::{ErrorResponse, RespondError};

#[derive(Debug)]
pub(crate) enum ApiError {
    /// Client sent something unusable (400).
    BadRequest(String),
    /// Upstream generation failed (500).
    Upstream(String),
}

impl From<RespondError> for ApiError {
    fn from(e: RespondError) -> Self {
        match e {
            RespondError::EmptyInput => ApiError::BadRequest(e.to_string()),
            RespondError::Generation(_) => ApiError::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Upstream(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
