//! Application configuration.
//!
//! Loaded from `$HOME/.config/framecraft/config.toml`; a missing file means
//! defaults. The same directory holds the persisted history and presets.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Bilingual pair used by the polish operation.
    #[serde(default)]
    pub languages: LanguageConfig,
}

impl AppConfig {
    /// Profile directory holding config, history, and presets.
    ///
    /// Uses $HOME/.config/framecraft for consistency across platforms and tests.
    pub fn profile_dir() -> Result<PathBuf, AppError> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::configuration("HOME environment variable not set"))?;
        Ok(PathBuf::from(home).join(".config").join("framecraft"))
    }

    /// Load the configuration, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, AppError> {
        let path = Self::profile_dir()?.join(CONFIG_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            AppError::configuration(format!("Malformed {}: {}", path.display(), e))
        })?;
        config.gemini.validate()?;
        Ok(config)
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiApiConfig {
    /// API base endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model invoked for enrich and polish.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per operation.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::configuration("gemini.model must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::configuration("gemini.timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::configuration("gemini.max_retries must be greater than 0"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

/// Language pair for the polish operation.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Language the polished prompt is written in.
    #[serde(default = "default_primary_language")]
    pub primary: String,
    /// Language the polished prompt is translated into.
    #[serde(default = "default_secondary_language")]
    pub secondary: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self { primary: default_primary_language(), secondary: default_secondary_language() }
    }
}

fn default_primary_language() -> String {
    "English".to_string()
}

fn default_secondary_language() -> String {
    "Indonesian".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.gemini.validate().is_ok());
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.languages.primary, "English");
        assert_eq!(config.languages.secondary, "Indonesian");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [gemini]
            model = "gemini-2.0-pro"

            [languages]
            secondary = "Japanese"
            "#,
        )
        .unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-pro");
        assert_eq!(config.gemini.timeout_secs, 30);
        assert_eq!(config.languages.primary, "English");
        assert_eq!(config.languages.secondary, "Japanese");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config: AppConfig = toml::from_str("[gemini]\ntimeout_secs = 0\n").unwrap();
        assert!(config.gemini.validate().is_err());
    }
}
