use include_dir::{Dir, include_dir};

use crate::domain::{PromptTemplateSource, TemplateKind};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Prompt templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPromptTemplates;

impl EmbeddedPromptTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl PromptTemplateSource for EmbeddedPromptTemplates {
    fn template(&self, kind: TemplateKind) -> Option<&str> {
        PROMPTS_DIR.get_file(kind.asset_name()).and_then(|file| file.contents_utf8())
    }
}
