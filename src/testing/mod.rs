mod memory_artifact_store;

pub use fake_completion_client::FakeCompletionClient;
pub use memory_artifact_store::MemoryArtifactStore;
