//! Library entry points used by the CLI.

use std::path::Path;

use tracing::debug;

use crate::app::commands;
use crate::domain::configuration::load_config;
use crate::domain::{
    AppConfig, AppError, ComponentSpec, ComposedPrompt, ConfigOverrides, GenerationConfig,
    TemplateKind,
};
use crate::ports::{CompletionClient, MockCompletionClient};
use crate::services::{EmbeddedPromptTemplates, HttpCompletionClient};

/// Load `tsxgen.toml` (or the explicit `config_path`) and apply overrides.
pub fn load_settings(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AppConfig, AppError> {
    let work_dir = std::env::current_dir()?;
    let config = load_config(config_path, &work_dir)?;
    let config = overrides.apply(config)?;
    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Build the completion client.
///
/// The credential is resolved here, so a missing key fails before any input
/// is collected or any request is attempted.
pub fn connect(
    config: &GenerationConfig,
    mock: bool,
) -> Result<Box<dyn CompletionClient>, AppError> {
    if mock {
        return Ok(Box::new(MockCompletionClient));
    }
    Ok(Box::new(HttpCompletionClient::from_env_with_config(config)?))
}

/// Compose the prompt for `spec` without contacting the model.
pub fn compose(spec: &ComponentSpec, kind: TemplateKind) -> Result<ComposedPrompt, AppError> {
    commands::prompt::execute(spec, kind, &EmbeddedPromptTemplates::new())
}
