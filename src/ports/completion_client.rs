//! Chat-completion client port definition.

use crate::domain::AppError;

/// Request for a single completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The composed prompt, sent as one user message.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Text returned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Completion text, unmodified.
    pub content: String,
    /// Model that produced the completion, when the service reports it.
    pub model: Option<String>,
}

/// Port for completion requests.
///
/// Implementations perform exactly one round trip per call and never retry.
pub trait CompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<Completion, AppError>;
}

impl<T: CompletionClient + ?Sized> CompletionClient for Box<T> {
    fn complete(&self, request: CompletionRequest) -> Result<Completion, AppError> {
        (**self).complete(request)
    }
}

/// Canned completion used by `--mock` runs.
pub const MOCK_COMPLETION: &str = "// tsxgen mock completion\nexport {};\n";

/// Mock client for running the pipeline without API calls.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient;

impl CompletionClient for MockCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<Completion, AppError> {
        println!("=== MOCK MODE ===");
        println!("Would request a completion with:");
        println!("  Model: {}", request.model);
        println!("  Temperature: {}", request.temperature);
        println!("  Prompt length: {} chars", request.prompt.len());

        Ok(Completion { content: MOCK_COMPLETION.to_string(), model: Some("mock".to_string()) })
    }
}
