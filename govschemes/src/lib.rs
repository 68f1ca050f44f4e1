//! # govschemes
//!
//! Answers questions about Indian government welfare schemes by forwarding them to a
//! generative-language service under a fixed system instruction.
//!
//! One component does the work: [`PromptResponder`]. It validates the question,
//! prefixes the [`SystemInstruction`], calls a [`GenerationService`] (Gemini in
//! production, [`MockGeneration`] in tests), reformats the answer with
//! [`clean_response`], and appends a [`ConversationRecord`] to a [`ConversationLog`].
//!
//! ## Main modules
//!
//! - [`instruction`]: [`SystemInstruction`], prompt assembly, YAML loading (`PROMPTS_DIR`).
//! - [`generation`]: [`GenerationService`] trait, [`GeminiClient`], [`MockGeneration`].
//! - [`cleanup`]: [`clean_response`] formatting rules.
//! - [`conversation_log`]: [`ConversationLog`] trait, [`JsonFileConversationLog`].
//! - [`responder`]: [`PromptResponder`], [`Reply`], [`RespondError`].
//! - [`settings`]: [`ResponderSettings`] from the environment.
//! - [`protocol`]: JSON bodies of the HTTP API.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use govschemes::{MockGeneration, NoOpConversationLog, PromptResponder, SystemInstruction};
//!
//! # async fn demo() -> Result<(), govschemes::RespondError> {
//! let responder = PromptResponder::new(
//!     SystemInstruction::default(),
//!     Arc::new(MockGeneration::with_reply("PM-KISAN pays Rs. 6000 a year.")),
//!     Arc::new(NoOpConversationLog),
//! );
//! let reply = responder.respond("Tell me about PM Kisan Scheme").await?;
//! println!("{}", reply.text);
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod conversation_log;
pub mod generation;
pub mod instruction;
pub mod protocol;
pub mod responder;
pub mod settings;

pub use cleanup::clean_response;
pub use conversation_log::{
    ConversationLog, ConversationLogError, ConversationRecord, JsonFileConversationLog,
    NoOpConversationLog,
};
pub use generation::{GeminiClient, GeminiConfig, GenerationError, GenerationService, MockGeneration};
pub use instruction::{PromptLoadError, SystemInstruction};
pub use protocol::{ChatRequest, ChatResponse, ErrorResponse, StatusResponse};
pub use responder::{LogOutcome, PromptResponder, Reply, RespondError};
pub use settings::{ResponderSettings, SettingsError};
