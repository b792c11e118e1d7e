mod completion_client_http;
mod embedded_prompt_templates;
mod filesystem_artifact_store;
mod spec_file_reader;

pub use completion_client_http::{HttpCompletionClient, api_key_from};
pub use embedded_prompt_templates::EmbeddedPromptTemplates;
pub use filesystem_artifact_store::FilesystemArtifactStore;
pub use spec_file_reader::read_component_spec;
