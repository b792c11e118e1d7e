pub mod composer;
pub mod template_kind;

pub use composer::{ComposedPrompt, PromptError, PromptTemplateSource, compose_prompt};
pub use template_kind::TemplateKind;
