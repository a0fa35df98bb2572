//! Application Configuration
//!
//! Provider and model settings stored as a single JSON document, with
//! an environment-variable fallback for the API key so secrets can be
//! kept out of the config file entirely.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable consulted when the config file carries no key.
pub const API_KEY_ENV_VAR: &str = "PLUME_API_KEY";

/// Provider and model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub provider: String,
    pub model: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: "openrouter".to_string(),
            model: "openai/gpt-4o-mini".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Directory holding the config and profile documents.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("plume")
    }

    /// Default location of the config document.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Load the configuration from `path`, falling back to defaults
    /// when the file does not exist.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(io::Error::from)
    }

    /// Write the configuration back to `path`, pretty-printed. A key
    /// sourced from the environment is never written; only a key that
    /// was already present in the document round-trips.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Resolve the API key: the config document wins, the environment
    /// is the fallback.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(API_KEY_ENV_VAR).ok().filter(|k| !k.is_empty()))
    }

    /// Configuration summary for display.
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Provider: {}", self.provider),
            format!("Model: {}", self.model),
            format!("Base URL: {}", self.base_url),
            format!(
                "API key: {}",
                match (&self.api_key, self.resolve_api_key()) {
                    (Some(_), _) => "from config file",
                    (None, Some(_)) => "from environment",
                    (None, None) => "not set",
                }
            ),
        ]
    }
}
