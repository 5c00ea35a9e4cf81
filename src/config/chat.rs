use crate::utils::error::{PrimeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::collections::HashMap;
use std::path::Path;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 50;

#[derive(Clone)]
pub struct ChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ChatConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Process environment first, then the `.env` file; existing variables win as with `dotenv()`.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = read_env_file(path)?;
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Builds the config from any key lookup, then validates it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PrimeError::MissingConfig {
                field: API_KEY_VAR.to_string(),
            })?;

        let config = Self {
            api_key,
            base_url: lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Reads `KEY=value` pairs from a `.env` file without touching the process environment.
pub fn read_env_file<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    let config_error = |e: dotenv::Error| PrimeError::ConfigError {
        message: format!("cannot load {}: {}", path.display(), e),
    };

    dotenv::from_path_iter(path)
        .map_err(config_error)?
        .map(|entry| entry.map_err(config_error))
        .collect()
}

impl Validate for ChatConfig {
    fn validate(&self) -> Result<()> {
        validate_url(BASE_URL_VAR, &self.base_url)?;
        validate_non_empty_string(MODEL_VAR, &self.model)?;
        Ok(())
    }
}
