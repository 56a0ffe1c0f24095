//! Run configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Default file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "copydeck.toml";

/// Configuration loaded from `copydeck.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// LLM API configuration.
    #[serde(default)]
    pub llm: LlmApiConfig,
    /// Content generation settings.
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.llm.validate()?;
        self.generate.validate()?;
        Ok(())
    }
}

/// Parse and validate configuration file content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Chat-completions API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmApiConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

impl LlmApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("llm.timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("llm.model must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error("llm.temperature must be between 0.0 and 2.0"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    60
}

/// Content generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Number of user questions requested from the LLM.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Number of questions answered into FAQ entries.
    #[serde(default = "default_faq_count")]
    pub faq_count: usize,
    /// Directory that receives the generated page files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            faq_count: default_faq_count(),
            output_dir: default_output_dir(),
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.question_count == 0 {
            return Err(AppError::config_error("generate.question_count must be greater than 0"));
        }
        Ok(())
    }
}

fn default_question_count() -> usize {
    15
}

fn default_faq_count() -> usize {
    5
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
