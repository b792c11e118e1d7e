use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::prompt::PromptError;

/// Library-wide error type for tsxgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// API credential is absent from the environment.
    #[error("{0} environment variable not set")]
    MissingCredential(String),

    /// Component name cannot be used as a file name.
    #[error("Invalid component name '{0}': must be non-empty and must not contain path separators")]
    InvalidComponentName(String),

    /// Structured component input could not be read or parsed.
    #[error("Failed to read component spec {path}: {details}")]
    SpecFile { path: String, details: String },

    /// Interactive input failed.
    #[error("Failed to read {field}: {details}")]
    Input { field: String, details: String },

    /// Prompt composition failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The service rejected the credential.
    #[error("Authentication failed ({status}): {details}")]
    Authentication { status: u16, details: String },

    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Service error ({status}): {details}")]
    Service { status: u16, details: String },

    /// The response body did not match the chat-completion shape.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// The service returned no completion text.
    #[error("Model returned an empty completion")]
    EmptyCompletion,

    /// Writing the generated component failed.
    #[error("Failed to write {}: {source}", .path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Whether the error belongs to the generation round trip.
    ///
    /// These are the failures an interactive session offers to retry. A
    /// rejected credential is not among them: retrying would resend it.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            AppError::Network(_)
                | AppError::Service { .. }
                | AppError::MalformedResponse(_)
                | AppError::EmptyCompletion
        )
    }
}
