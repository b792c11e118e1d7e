use crate::domain::PromptTemplateSource;
use crate::ports::{ArtifactStore, CompletionClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CompletionClient, S: ArtifactStore, T: PromptTemplateSource> {
    client: C,
    store: S,
    templates: T,
}

impl<C: CompletionClient, S: ArtifactStore, T: PromptTemplateSource> AppContext<C, S, T> {
    /// Create a new application context.
    pub fn new(client: C, store: S, templates: T) -> Self {
        Self { client, store, templates }
    }

    /// Get a reference to the completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the prompt template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
