//! Chat completion response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::ChatCompletionMessage;
use crate::error::OpenRouterError;
use crate::types::usage::Usage;

/// Why generation stopped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
    Error,
    /// Any value this crate does not know about
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatCompletionMessage,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// Body returned by `POST /chat/completions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    pub id: String,
    #[serde(default)]
    pub object: String,
    /// Unix timestamp (seconds)
    #[serde(default)]
    pub created: i64,
    pub model: String,
    /// Upstream provider that served the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    pub fn first_message(&self) -> Option<&ChatCompletionMessage> {
        self.choices.first().map(|c| &c.message)
    }

    /// Text of the first choice
    pub fn first_text(&self) -> Option<String> {
        self.first_message().map(ChatCompletionMessage::text)
    }
}

/// Error envelope: `{"error":{"code":..,"message":..,"metadata":..}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    /// Status code; non-numeric codes some upstreams send decode as `0`
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

fn lenient_code<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Code>::deserialize(deserializer)? {
        Some(Code::Number(n)) => u16::try_from(n).unwrap_or(0),
        Some(Code::Text(text)) => text.trim().parse().unwrap_or(0),
        None => 0,
    })
}

impl From<ApiErrorResponse> for OpenRouterError {
    fn from(resp: ApiErrorResponse) -> Self {
        Self::ApiError {
            code: resp.error.code,
            message: resp.error.message,
            details: resp.error.metadata,
        }
    }
}

/// Decodes a chat-completion response body.
///
/// An `{"error": ...}` envelope becomes [`OpenRouterError::ApiError`]; any other
/// body must be a well-formed completion.
pub fn parse_chat_response(body: &[u8]) -> Result<ChatCompletionResponse, OpenRouterError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    if value.get("error").is_some_and(|e| !e.is_null()) {
        let err: ApiErrorResponse = serde_json::from_value(value)?;
        tracing::warn!(
            code = err.error.code,
            message = %err.error.message,
            "OpenRouter returned an error body"
        );
        return Err(err.into());
    }

    Ok(serde_json::from_value(value)?)
}
