//! Runtime assistant configuration.
//!
//! Defaults come from the build (an optional `DESKTOP_ASSISTANT_API_KEY` baked in at compile
//! time); a JSON override stored under [`ASSISTANT_CONFIG_PREF_KEY`] replaces individual fields.

use platform_host::{load_pref_with, PrefsStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefs key holding an [`AssistantConfigOverride`].
pub const ASSISTANT_CONFIG_PREF_KEY: &str = "desktop.assistant.v1";
pub const DEFAULT_ASSISTANT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to load assistant config: {0}")]
    Prefs(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: option_env!("DESKTOP_ASSISTANT_API_KEY").map(str::to_string),
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            endpoint: DEFAULT_ASSISTANT_ENDPOINT.to_string(),
        }
    }
}

impl AssistantConfig {
    /// The API key, or `None` when it is missing or blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// `generateContent` URL for `api_key`.
    pub fn generate_content_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            api_key
        )
    }

    pub fn with_override(mut self, overrides: AssistantConfigOverride) -> Self {
        if let Some(api_key) = overrides.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(model) = overrides.model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        if let Some(endpoint) = overrides.endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }
}

/// Persisted override; absent fields keep the build default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssistantConfigOverride {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Loads the effective assistant configuration from `prefs`.
///
/// # Errors
///
/// Returns [`ConfigError::Prefs`] when the store fails or the stored override is malformed.
pub async fn load_assistant_config(
    prefs: &dyn PrefsStore,
) -> Result<AssistantConfig, ConfigError> {
    let overrides =
        load_pref_with::<_, AssistantConfigOverride>(prefs, ASSISTANT_CONFIG_PREF_KEY)
            .await
            .map_err(ConfigError::Prefs)?;
    Ok(match overrides {
        Some(overrides) => AssistantConfig::default().with_override(overrides),
        None => AssistantConfig::default(),
    })
}
