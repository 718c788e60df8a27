//! Configuration management for the health advisor
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.health-advisor/config.toml
//!
//! The API credential may also come from `GEMINI_API_KEY`, which takes
//! precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{AdvisorError, Result};

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Placeholder shipped in sample configs; never a real key
const PLACEHOLDER_KEY: &str = "api_key";

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

/// Terminal display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub animate: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "models/gemini-2.0-flash-lite".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            request_timeout_secs: 60,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            animate: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut config = match path {
            Some(config_path) => Self::load_from_file(&config_path)?,
            None => Self::load_default()?,
        };
        config.apply_env();
        Ok(config)
    }

    /// Take the credential from the environment when it is set
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            debug!("using credential from {}", API_KEY_ENV);
            self.model.api_key = Some(key);
        }
    }

    /// Apply command-line overrides and re-check the result
    pub fn apply_overrides(&mut self, model: Option<&str>, no_animation: bool) -> Result<()> {
        if let Some(model) = model {
            self.model.model = model.to_string();
        }
        if no_animation {
            self.display.animate = false;
        }
        self.validate()
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".health-advisor").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.model.model.trim().is_empty() {
            return Err(AdvisorError::ConfigError(
                "model must not be empty".to_string(),
            ));
        }

        if self.model.request_timeout_secs == 0 {
            return Err(AdvisorError::ConfigError(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !self.model.base_url.starts_with("http://") && !self.model.base_url.starts_with("https://") {
            return Err(AdvisorError::ConfigError(format!(
                "Invalid base_url: {}",
                self.model.base_url
            )));
        }

        Ok(())
    }

    /// Check the credential and return it
    ///
    /// Fails when the key is missing, blank, contains whitespace, or is the
    /// sample placeholder.
    pub fn credential(&self) -> Result<&str> {
        let key = self.model.api_key.as_deref().ok_or_else(|| {
            AdvisorError::MissingCredential(format!(
                "set {} or model.api_key in the config file",
                API_KEY_ENV
            ))
        })?;

        if key.trim().is_empty() {
            return Err(AdvisorError::MissingCredential(
                "API key is empty".to_string(),
            ));
        }

        if key.chars().any(char::is_whitespace) {
            warn!("API key contains whitespace");
            return Err(AdvisorError::ConfigError(
                "API key must not contain whitespace".to_string(),
            ));
        }

        if key == PLACEHOLDER_KEY {
            return Err(AdvisorError::ConfigError(
                "API key is still the placeholder value".to_string(),
            ));
        }

        Ok(key)
    }

    /// Model identifier without the `models/` prefix
    pub fn model_id(&self) -> &str {
        let model = self.model.model.trim();
        model.strip_prefix("models/").unwrap_or(model)
    }

    /// Render for display with the credential masked
    pub fn to_masked_toml(&self) -> Result<String> {
        let mut masked = self.clone();
        masked.model.api_key = masked.model.api_key.as_deref().map(mask_key);
        toml::to_string_pretty(&masked)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}

/// Keep the last four characters of a key
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
