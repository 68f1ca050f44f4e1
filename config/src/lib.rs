//! Configuration loading for govschemes.
//!
//! Values come from the XDG `config.toml` `[env]` table and a project `.env`, and are
//! applied to the process environment with priority **existing env > .env > XDG**.
//! Everything downstream (`govschemes::ResponderSettings`, the CLI) then reads plain env vars.
//!
//! ```toml
//! # ~/.config/govschemes/config.toml
//! [env]
//! GEMINI_MODEL = "gemini-1.5-flash"
//! SERVE_ADDR = "127.0.0.1:8000"
//! ```
//!
//! With the `tracing-init` feature, [`logging`] installs the shared subscriber.

mod dotenv;
#[cfg(feature = "tracing-init")]
pub mod logging;
mod xdg_toml;

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

pub use xdg_toml::config_path;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Sets every key found in `.env` or the XDG `[env]` table that is **not** already set.
///
/// For a key missing from the process environment, `.env` (in `override_dir`, else the
/// current directory) wins over `$XDG_CONFIG_HOME/<app_name>/config.toml`.
/// Returns the keys that were set.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    let mut keys: HashSet<&String> = xdg_map.keys().collect();
    keys.extend(dotenv_map.keys());

    let mut applied = Vec::new();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(v) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, v);
            applied.push(key.clone());
        }
    }
    applied.sort();
    Ok(applied)
}

/// Serializes tests that mutate process-global env vars.
#[cfg(test)]
pub(crate) fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
