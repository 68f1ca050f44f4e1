//! Responder settings read from the process environment.
//!
//! Call `config::load_and_apply("govschemes", ..)` first so `.env` and the XDG
//! `config.toml` `[env]` table are visible here. The credential is only ever read from
//! the environment.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::conversation_log::JsonFileConversationLog;
use crate::generation::{
    GeminiClient, GeminiConfig, GenerationError, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
use crate::instruction;
use crate::responder::PromptResponder;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_CONVERSATION_LOG: &str = "conversations.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("GOOGLE_API_KEY is not set; export it or add it to .env")]
    MissingApiKey,
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Everything needed to build a [`PromptResponder`] backed by Gemini and a JSON file log.
/// `Debug` output never contains the key (see [`GeminiConfig`]).
#[derive(Clone, Debug)]
pub struct ResponderSettings {
    pub gemini: GeminiConfig,
    pub conversation_log: PathBuf,
    pub clean_response: bool,
    /// Directory searched for `instruction.yaml`; `None` means `PROMPTS_DIR` or `./prompts`.
    pub prompts_dir: Option<PathBuf>,
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

impl ResponderSettings {
    /// Reads settings from the process environment.
    ///
    /// - `GOOGLE_API_KEY` (required)
    /// - `GEMINI_MODEL` (default `gemini-1.5-flash`)
    /// - `GEMINI_BASE_URL` (default Google endpoint)
    /// - `GEMINI_TIMEOUT_SECS` (default 30)
    /// - `CONVERSATION_LOG_PATH` (default `conversations.json`)
    /// - `CLEAN_RESPONSE` (default true)
    /// - `PROMPTS_DIR` (optional)
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit lookup (empty values count as unset).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_ENV).ok_or(SettingsError::MissingApiKey)?;
        let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(SettingsError::Invalid {
                    key: "GEMINI_TIMEOUT_SECS",
                    value: v,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let clean_response = match get("CLEAN_RESPONSE") {
            Some(v) => parse_bool("CLEAN_RESPONSE", &v)?,
            None => true,
        };

        Ok(Self {
            gemini: GeminiConfig {
                api_key: api_key.trim().to_string(),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            conversation_log: get("CONVERSATION_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONVERSATION_LOG)),
            clean_response,
            prompts_dir: get("PROMPTS_DIR").map(PathBuf::from),
        })
    }

    /// Builds the responder: Gemini client, JSON file log, instruction from `prompts_dir`.
    pub fn build_responder(&self) -> Result<PromptResponder, SettingsError> {
        let generator = GeminiClient::new(self.gemini.clone())?;
        let log = JsonFileConversationLog::new(self.conversation_log.clone());
        let instruction = instruction::load_or_default(self.prompts_dir.as_deref());
        tracing::info!(
            model = %self.gemini.model,
            log = %self.conversation_log.display(),
            "prompt responder ready"
        );
        Ok(
            PromptResponder::new(instruction, Arc::new(generator), Arc::new(log))
                .with_cleaning(self.clean_response),
        )
    }
}
