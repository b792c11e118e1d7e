//! Single-shot generation pipeline: compose, complete, write.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppConfig, AppError, ComponentSpec, PromptTemplateSource, compose_prompt};
use crate::ports::{ArtifactStore, CompletionClient, CompletionRequest};

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// File the completion was written to.
    pub path: PathBuf,
    /// Bytes written.
    pub bytes: usize,
}

/// Generate one component and write it to `<output dir>/<Name>.tsx`.
///
/// Performs exactly one completion request. The completion is written
/// without any transformation.
pub fn execute<C, S, T>(
    ctx: &AppContext<C, S, T>,
    spec: &ComponentSpec,
    config: &AppConfig,
) -> Result<GenerateOutcome, AppError>
where
    C: CompletionClient,
    S: ArtifactStore,
    T: PromptTemplateSource,
{
    let template = config.generation.template;
    let prompt = compose_prompt(spec, template, ctx.templates())?;
    let prompt_chars = prompt.content.chars().count();
    info!(component = %spec.name, %template, prompt_chars, "Composed prompt");
    debug!("Prompt:\n{}", prompt.content);

    let completion = ctx.client().complete(CompletionRequest {
        prompt: prompt.content,
        model: config.generation.model.clone(),
        temperature: config.generation.temperature,
    })?;
    info!(
        bytes = completion.content.len(),
        model = completion.model.as_deref().unwrap_or("unknown"),
        "Received completion"
    );

    let path = ctx.store().write_artifact(
        &config.output.dir,
        &spec.output_file_name(),
        &completion.content,
    )?;

    Ok(GenerateOutcome { path, bytes: completion.content.len() })
}
