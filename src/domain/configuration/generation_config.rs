//! Generation configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, TemplateKind};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Configuration loaded from `tsxgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Model API configuration.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        Ok(())
    }
}

/// Chat-completion API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Prompt template variant.
    #[serde(default)]
    pub template: TemplateKind,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            template: TemplateKind::default(),
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_timeout() -> u64 {
    120
}

/// Where generated components are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_output_dir() }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
