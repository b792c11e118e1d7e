//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, GenerationConfig};
use crate::ports::{Completion, CompletionClient, CompletionRequest};

/// HTTP client for an OpenAI-compatible chat-completion endpoint.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GenerationConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env_with_config(config: &GenerationConfig) -> Result<Self, AppError> {
        let api_key = api_key_from(|name| std::env::var(name).ok())?;
        Self::new(api_key, config)
    }
}

/// Resolve the API key through `lookup`, treating blank values as missing.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, AppError> {
    lookup(API_KEY_ENV)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::MissingCredential(API_KEY_ENV.to_string()))
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<Completion, AppError> {
        let api_request = ApiRequest {
            model: &request.model,
            temperature: request.temperature,
            messages: vec![ApiMessage { role: "user", content: &request.prompt }],
        };

        info!(url = %self.api_url, model = %request.model, "Requesting completion");

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Network(format!("request timed out: {}", e))
                } else {
                    AppError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received completion response");

        if status.is_success() {
            let body = response.text().map_err(|e| AppError::Network(e.to_string()))?;
            parse_completion(&body)
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(status_error(status, error_text))
        }
    }
}

fn status_error(status: StatusCode, details: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::Authentication { status: status.as_u16(), details }
        }
        _ => AppError::Service { status: status.as_u16(), details },
    }
}

fn parse_completion(body: &str) -> Result<Completion, AppError> {
    let api_response: ApiResponse =
        serde_json::from_str(body).map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    let content = api_response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(AppError::EmptyCompletion)?;

    Ok(Completion { content, model: api_response.model })
}
