//! Prompt composition.
//!
//! Renders one of the prompt templates with the fields of a [`ComponentSpec`].
//! Templates only interpolate `{{ ... }}` values; field text is passed as
//! context data and lands in the output verbatim.

use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use thiserror::Error;

use super::TemplateKind;
use crate::domain::ComponentSpec;

/// Source of prompt template text.
pub trait PromptTemplateSource {
    /// Return the template source for the given kind, if available.
    fn template(&self, kind: TemplateKind) -> Option<&str>;
}

/// The instruction string sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub content: String,
    pub template: TemplateKind,
}

impl ComposedPrompt {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

/// Error during prompt composition.
#[derive(Debug, Clone, Error)]
pub enum PromptError {
    /// The template for the requested kind is not available.
    #[error("Prompt template not found: {0}")]
    TemplateNotFound(String),

    /// Control structures are not allowed in prompt templates.
    #[error("Template syntax '{token}' is not allowed in {template}")]
    TemplateSyntaxNotAllowed { template: String, token: String },

    /// The template failed to render.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRenderError { template: String, reason: String },
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Compose the prompt for `spec` using the template selected by `kind`.
///
/// Composition is deterministic. With the embedded templates it cannot fail;
/// errors only surface for a missing or broken template source.
pub fn compose_prompt(
    spec: &ComponentSpec,
    kind: TemplateKind,
    templates: &impl PromptTemplateSource,
) -> Result<ComposedPrompt, PromptError> {
    let source = templates
        .template(kind)
        .ok_or_else(|| PromptError::TemplateNotFound(kind.asset_name().to_string()))?;

    if let Some(token) = disallowed_template_token(source) {
        return Err(PromptError::TemplateSyntaxNotAllowed {
            template: kind.asset_name().to_string(),
            token: token.to_string(),
        });
    }

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    });

    let ctx = context! {
        component_name => spec.name.as_str(),
        purpose => spec.purpose.as_str(),
        props => spec.props.as_str(),
        behavior => spec.behavior.as_str(),
        styling => spec.styling.as_str(),
        examples => spec.examples.as_str(),
    };

    let content =
        env.render_str(source, ctx).map_err(|err| PromptError::TemplateRenderError {
            template: kind.asset_name().to_string(),
            reason: err.to_string(),
        })?;

    Ok(ComposedPrompt { content, template: kind })
}

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}
