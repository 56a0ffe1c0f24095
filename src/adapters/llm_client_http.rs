//! Chat-completions LLM client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{AppError, LlmApiConfig};
use crate::ports::LlmClient;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_STATUS_MESSAGE: &str = "LLM API request failed";

/// HTTP transport for an OpenAI-compatible chat-completions endpoint.
///
/// Each call performs a single request; failures are folded into the
/// returned text.
#[derive(Clone)]
pub struct HttpLlmClient {
    api_key: String,
    api_url: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpLlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLlmClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpLlmClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &LlmApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::LlmApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Create from the API key environment variable, if it is set.
    pub fn from_env_with_config(config: &LlmApiConfig) -> Result<Option<Self>, AppError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Self::new(key, config).map(Some),
            _ => Ok(None),
        }
    }

    fn send_request(&self, request: &ChatRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::LlmApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ChatResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::LlmApiError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let content = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| AppError::LlmApiError {
                    message: "No completion content in response".into(),
                    status: Some(status.as_u16()),
                })?;

            return Ok(content.trim().to_string());
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::LlmApiError { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl LlmClient for HttpLlmClient {
    fn generate(&self, prompt: &str, system_role: &str) -> String {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system_role },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature: self.temperature,
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "sending completion request");
        match self.send_request(&request) {
            Ok(content) => content,
            Err(AppError::LlmApiError { message, status }) => {
                warn!(?status, %message, "completion request failed");
                format!("Error generating content: {}", message)
            }
            Err(other) => format!("Error generating content: {}", other),
        }
    }
}
