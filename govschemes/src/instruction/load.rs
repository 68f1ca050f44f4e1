//! Load the system instruction from a YAML file and apply the env override.
//!
//! **Canonical source**: the default text lives in `govschemes/prompts/instruction.yaml`;
//! it is embedded at compile time and used when no `PROMPTS_DIR` file is present.

use std::path::{Path, PathBuf};

use super::SystemInstruction;

const EMBED_INSTRUCTION: &str = include_str!("../../prompts/instruction.yaml");

const INSTRUCTION_FILE: &str = "instruction.yaml";

/// Default directory name when `PROMPTS_DIR` is not set.
const DEFAULT_PROMPTS_DIR: &str = "prompts";

/// Env var whose value replaces the instruction text (restricted topics are kept).
const INSTRUCTION_ENV: &str = "GOVSCHEMES_SYSTEM_INSTRUCTION";

/// Error when loading the instruction from a directory (missing dir, unreadable or invalid YAML).
#[derive(Debug, thiserror::Error)]
pub enum PromptLoadError {
    #[error("prompts directory not found or not readable: {0}")]
    DirNotFound(String),
    #[error("failed to read prompts file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
}

fn prompts_dir(dir: Option<&Path>) -> PathBuf {
    dir.map(PathBuf::from).unwrap_or_else(|| {
        std::env::var("PROMPTS_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPTS_DIR))
    })
}

fn apply_env(instruction: SystemInstruction) -> SystemInstruction {
    apply_override(instruction, std::env::var(INSTRUCTION_ENV).ok())
}

/// Replaces the text with `text` unless it is missing or blank; topics are kept.
fn apply_override(mut instruction: SystemInstruction, text: Option<String>) -> SystemInstruction {
    if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
        instruction.instruction = text;
    }
    instruction
}

/// Loads `instruction.yaml` from `dir` (or `PROMPTS_DIR`, or `./prompts`).
///
/// A directory without the file yields the embedded default. Errors only when the
/// directory is missing or the file is present but unreadable / not valid YAML.
pub fn load(dir: Option<&Path>) -> Result<SystemInstruction, PromptLoadError> {
    let base = prompts_dir(dir);
    if !base.is_dir() {
        return Err(PromptLoadError::DirNotFound(base.display().to_string()));
    }
    let path = base.join(INSTRUCTION_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(default_from_embedded());
        }
        Err(e) => {
            return Err(PromptLoadError::ReadFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };
    let parsed: SystemInstruction =
        serde_yaml::from_str(&content).map_err(|e| PromptLoadError::ParseYaml {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(apply_env(parsed))
}

/// Parses the embedded `instruction.yaml`. Single source of the default text.
pub fn default_from_embedded() -> SystemInstruction {
    let parsed = serde_yaml::from_str::<SystemInstruction>(EMBED_INSTRUCTION)
        .unwrap_or_else(|_| SystemInstruction::new(String::new(), Vec::new()));
    apply_env(parsed)
}

/// Loads from `dir` when possible, otherwise falls back to the embedded default.
pub fn load_or_default(dir: Option<&Path>) -> SystemInstruction {
    match load(dir) {
        Ok(instruction) => instruction,
        Err(PromptLoadError::DirNotFound(_)) => default_from_embedded(),
        Err(e) => {
            tracing::warn!("{}; using embedded instruction", e);
            default_from_embedded()
        }
    }
}
