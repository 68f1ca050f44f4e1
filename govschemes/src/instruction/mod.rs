//! System instruction: the fixed persona and constraint text prefixed to every question.
//!
//! The default text is embedded from `govschemes/prompts/instruction.yaml`; see [`load`]
//! for the `PROMPTS_DIR` override. The instruction is built once at startup and never
//! changes per request.

mod load;

pub use load::{default_from_embedded, load, load_or_default, PromptLoadError};

use serde::Deserialize;

/// Trailing line appended after the user query in every prompt.
const RESPONSE_GUIDANCE: &str =
    "Provide a clear and structured response with relevant scheme details.";

/// Persona/constraint text plus the restricted topics list shipped with it.
///
/// `restricted_topics` is informational: requests are never filtered on it.
/// [`SystemInstruction::mentioned_restricted_topic`] exists so the responder can trace
/// when a question touches one.
#[derive(Clone, Debug, Deserialize)]
pub struct SystemInstruction {
    instruction: String,
    #[serde(default)]
    restricted_topics: Vec<String>,
}

impl SystemInstruction {
    pub fn new(instruction: impl Into<String>, restricted_topics: Vec<String>) -> Self {
        Self {
            instruction: instruction.into(),
            restricted_topics,
        }
    }

    pub fn text(&self) -> &str {
        &self.instruction
    }

    pub fn restricted_topics(&self) -> &[String] {
        &self.restricted_topics
    }

    /// Returns the first restricted topic that appears (case-insensitive) in `user_input`.
    pub fn mentioned_restricted_topic(&self, user_input: &str) -> Option<&str> {
        let lowered = user_input.to_lowercase();
        self.restricted_topics
            .iter()
            .find(|topic| lowered.contains(&topic.to_lowercase()))
            .map(String::as_str)
    }

    /// Concatenates the instruction and the user's message into the upstream prompt.
    pub fn build_prompt(&self, user_input: &str) -> String {
        format!(
            "\n{}\nUser Query: {}\n{}\n",
            self.instruction.trim_end(),
            user_input,
            RESPONSE_GUIDANCE
        )
    }
}

impl Default for SystemInstruction {
    fn default() -> Self {
        default_from_embedded()
    }
}
