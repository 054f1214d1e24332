//! Chat-completions HTTP client
//!
//! Implements the CompletionClient trait against an OpenAI-compatible
//! chat completions endpoint. One POST per call, no internal retry; the
//! reply text is `choices[0].message.content`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{CompletionClient, LlmError, Message};
use crate::config::LlmConfig;

/// OpenAI-compatible chat completions client
pub struct OpenAiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> eyre::Result<Self> {
        let api_key = config.get_api_key()?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Build the request body for the chat completions API
    fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        debug!(%self.model, message_count = messages.len(), "build_request_body: called");
        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "messages": messages,
        })
    }

    /// Extract the reply text from a parsed response
    fn parse_response(&self, response: ChatResponse) -> Result<String, LlmError> {
        let choice = response.choices.into_iter().next().ok_or(LlmError::NoCompletion)?;
        match choice.message.content {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(LlmError::NoCompletion),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
        debug!(%self.model, message_count = messages.len(), "complete: called");
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(messages);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            debug!(status, "complete: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status, provider_message(&text)));
        }

        let text = response.text().await.map_err(LlmError::Transport)?;
        let api_response: ChatResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        debug!("complete: success");
        self.parse_response(api_response)
    }
}

/// Extract the structured error message from a provider error body,
/// falling back to the raw text.
fn provider_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}

// Chat completions API response types

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
