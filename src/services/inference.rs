// src/services/inference.rs
//! Client for an OpenAI-style `chat/completions` endpoint, such as the one
//! Ollama or llama.cpp expose locally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::InferenceConfig;
use crate::message::Message;

/// Error bodies from the endpoint are cut to this many characters.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("request to inference endpoint failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inference endpoint returned {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("malformed completion response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("completion response has no message content")]
    EmptyChoices,
}

impl InferenceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Collapse whitespace and cap the length of a non-2xx response body.
pub fn summarize_error_body(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_ERROR_BODY_CHARS)
        .collect()
}

/// Pull `choices[0].message.content` out of a raw response body, trimmed.
pub fn parse_completion(body: &str) -> Result<String, InferenceError> {
    let resp: CompletionResponse = serde_json::from_str(body)?;
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|content| content.trim().to_string())
        .ok_or(InferenceError::EmptyChoices)
}

#[derive(Clone, Debug)]
pub struct InferenceClient {
    config: InferenceConfig,
    client: reqwest::Client,
}

impl InferenceClient {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn request_for<'a>(&'a self, messages: &'a [Message]) -> CompletionRequest<'a> {
        let sampling = self.config.sampling;
        CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            max_tokens: sampling.max_tokens,
            stream: false,
        }
    }

    /// One delivery attempt, bounded by the configured timeout.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, InferenceError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .timeout(self.config.timeout)
            .json(&self.request_for(messages))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(InferenceError::HttpStatus {
                status: status.as_u16(),
                body: summarize_error_body(&body),
            });
        }

        parse_completion(&body)
    }
}
