use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{endpoints, history, models, paths};
use crate::error::HelpBotError;
use crate::llm::{GeminiClient, LlmClient};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    #[serde(default)]
    pub history: HistorySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Reported by `/status`; history is never truncated to fit it.
    pub max_token_limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_token_limit: history::DEFAULT_MAX_TOKEN_LIMIT,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings {
                model: models::DEFAULT_GEMINI_MODEL.to_string(),
                api_key_env: endpoints::DEFAULT_API_KEY_ENV.to_string(),
                base_url: None,
                temperature: models::DEFAULT_TEMPERATURE,
                max_output_tokens: models::DEFAULT_MAX_OUTPUT_TOKENS,
            },
            history: HistorySettings::default(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::CONFIG_DIR)
            .join(paths::CONFIG_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Read settings from `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!(path = %path.display(), "invalid config, using defaults: {e}"),
                },
                Err(e) => tracing::warn!(path = %path.display(), "unreadable config, using defaults: {e}"),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), HelpBotError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), HelpBotError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| HelpBotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable specified in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    /// Like [`Settings::api_key`], but a missing key is a configuration error.
    pub fn require_api_key(&self) -> Result<String, HelpBotError> {
        self.api_key().ok_or_else(|| {
            HelpBotError::config(format!(
                "{} not found. Set it in the environment or a .env file.",
                self.llm.api_key_env
            ))
        })
    }

    /// Build an LLM client from the current settings.
    pub fn build_llm_client(&self) -> Result<Box<dyn LlmClient>, HelpBotError> {
        let api_key = self.require_api_key()?;
        let mut client = GeminiClient::new(api_key)
            .with_model(self.llm.model.clone())
            .with_temperature(self.llm.temperature)
            .with_max_output_tokens(self.llm.max_output_tokens);
        if let Some(ref url) = self.llm.base_url {
            client = client.with_base_url(url.clone());
        }
        Ok(Box::new(client))
    }
}
