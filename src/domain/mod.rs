pub mod component_spec;
pub mod configuration;
pub mod error;
pub mod prompt;

pub use component_spec::{COMPONENT_EXTENSION, ComponentName, ComponentSpec};
pub use configuration::{
    API_KEY_ENV, AppConfig, CONFIG_FILE, ConfigOverrides, GenerationConfig, OutputConfig,
};
pub use error::AppError;
pub use prompt::{ComposedPrompt, PromptError, PromptTemplateSource, TemplateKind, compose_prompt};
