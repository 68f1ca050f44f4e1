//! RemoteBackend: talk to a running server over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use govschemes::{ChatRequest, ChatResponse, ErrorResponse};
use serde_json::Value;

use super::{AskBackend, AskError};

const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Upper bound for one request; the server itself waits up to `GEMINI_TIMEOUT_SECS` upstream.
const REQUEST_TIMEOUT_SECS: u64 = 120;

pub struct RemoteBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AskError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AskError::Transport {
                url: base_url.clone(),
                cause: e.to_string(),
            })?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport(url: &str, e: reqwest::Error) -> AskError {
        AskError::Transport {
            url: url.to_string(),
            cause: e.to_string(),
        }
    }

    /// `GET /test`; returns status and the JSON body as received.
    pub async fn status(&self) -> Result<(u16, Value), AskError> {
        let url = format!("{}/test", self.base_url);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport(&url, e))?;
        let status = res.status().as_u16();
        let body = res.json().await.map_err(|e| Self::transport(&url, e))?;
        Ok((status, body))
    }

    /// `POST /chat`; returns status and the JSON body as received.
    pub async fn chat(&self, message: &str) -> Result<(u16, Value), AskError> {
        let url = format!("{}/chat", self.base_url);
        let res = self
            .http
            .post(&url)
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(|e| Self::transport(&url, e))?;
        let status = res.status().as_u16();
        let body = res.json().await.map_err(|e| Self::transport(&url, e))?;
        Ok((status, body))
    }
}

#[async_trait]
impl AskBackend for RemoteBackend {
    async fn ask(&self, message: &str) -> Result<String, AskError> {
        let (status, body) = self.chat(message).await?;
        if (200..300).contains(&status) {
            if let Ok(ok) = serde_json::from_value::<ChatResponse>(body.clone()) {
                return Ok(ok.response);
            }
        }
        let error = serde_json::from_value::<ErrorResponse>(body.clone())
            .map(|e| e.error)
            .unwrap_or_else(|_| body.to_string());
        Err(AskError::Rejected { status, error })
    }
}
