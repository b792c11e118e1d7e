//! Prompt preview: compose without calling the model.

use crate::domain::{
    AppError, ComponentSpec, ComposedPrompt, PromptTemplateSource, TemplateKind, compose_prompt,
};

pub fn execute(
    spec: &ComponentSpec,
    kind: TemplateKind,
    templates: &impl PromptTemplateSource,
) -> Result<ComposedPrompt, AppError> {
    Ok(compose_prompt(spec, kind, templates)?)
}
