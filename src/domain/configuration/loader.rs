//! Configuration loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError, TemplateKind};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "tsxgen.toml";

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub template: Option<TemplateKind>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Apply overrides on top of `config` and re-validate.
    pub fn apply(self, mut config: AppConfig) -> Result<AppConfig, AppError> {
        if let Some(model) = self.model {
            config.generation.model = model;
        }
        if let Some(temperature) = self.temperature {
            config.generation.temperature = temperature;
        }
        if let Some(template) = self.template {
            config.generation.template = template;
        }
        if let Some(dir) = self.output_dir {
            config.output.dir = dir;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `tsxgen.toml` in `work_dir` is
/// used when present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<AppConfig, AppError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (work_dir.join(CONFIG_FILE), false),
    };

    match fs::read_to_string(&path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if required {
                Err(AppError::ConfigFileNotFound(path.display().to_string()))
            } else {
                Ok(AppConfig::default())
            }
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
