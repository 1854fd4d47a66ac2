//! Chat completion request

use serde::{Deserialize, Serialize};

use super::message::ChatCompletionMessage;
use crate::config::OpenRouterConfig;
use crate::error::OpenRouterError;
use crate::types::tools::{Tool, ToolChoice};

/// Structured output mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    Text,
    JsonObject,
    JsonSchema { json_schema: serde_json::Value },
}

/// Body of `POST /chat/completions`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    /// Fallback models tried in order when `model` is unavailable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    /// OpenRouter prompt transforms (e.g. `"middle-out"`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<String>,
    /// Stable end-user identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }

    /// Creates a request for the configured default model.
    pub fn from_config(
        config: &OpenRouterConfig,
        messages: Vec<ChatCompletionMessage>,
    ) -> Result<Self, OpenRouterError> {
        let model = config.default_model.clone().ok_or_else(|| {
            OpenRouterError::InvalidInput("no model given and no default_model configured".into())
        })?;
        Ok(Self::new(model, messages))
    }

    pub fn with_fallback_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_stop<I, S>(mut self, stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop = stop.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_tool_choice(mut self, choice: ToolChoice) -> Self {
        self.tool_choice = Some(choice);
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    pub fn with_transforms<I, S>(mut self, transforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transforms = transforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Checks the request is sendable: a model and at least one message.
    pub fn validate(&self) -> Result<(), OpenRouterError> {
        if self.model.trim().is_empty() {
            return Err(OpenRouterError::InvalidInput(
                "model must not be empty".to_string(),
            ));
        }
        if self.messages.is_empty() {
            return Err(OpenRouterError::InvalidInput(
                "messages must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates and encodes the request body.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, OpenRouterError> {
        self.validate()?;
        let body = serde_json::to_vec(self)?;
        tracing::trace!(
            model = %self.model,
            messages = self.messages.len(),
            bytes = body.len(),
            "encoded chat completion request"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_request_omits_unset_fields() {
        let req = ChatCompletionRequest::new(
            "openai/gpt-4o",
            vec![ChatCompletionMessage::user("Hello")],
        );
        let body = String::from_utf8(req.to_json_bytes().unwrap()).unwrap();
        assert_eq!(
            body,
            r#"{"model":"openai/gpt-4o","messages":[{"role":"user","content":"Hello"}]}"#
        );
    }

    #[test]
    fn optional_fields_are_emitted_when_set() {
        let req = ChatCompletionRequest::new("m", vec![ChatCompletionMessage::user("x")])
            .with_fallback_models(["a/b", "c/d"])
            .with_max_tokens(64)
            .with_stop(["END"])
            .with_tool_choice(ToolChoice::None)
            .with_response_format(ResponseFormat::JsonObject)
            .with_transforms(["middle-out"]);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["models"], json!(["a/b", "c/d"]));
        assert_eq!(v["max_tokens"], json!(64));
        assert_eq!(v["stop"], json!(["END"]));
        assert_eq!(v["tool_choice"], json!("none"));
        assert_eq!(v["response_format"], json!({"type": "json_object"}));
        assert_eq!(v["transforms"], json!(["middle-out"]));
        assert!(v.get("temperature").is_none());
    }

    #[test]
    fn validate_rejects_empty_model_and_messages() {
        let err = ChatCompletionRequest::new(" ", vec![ChatCompletionMessage::user("x")])
            .to_json_bytes()
            .unwrap_err();
        assert!(matches!(err, OpenRouterError::InvalidInput(_)));

        let err = ChatCompletionRequest::new("m", vec![]).validate().unwrap_err();
        assert!(matches!(err, OpenRouterError::InvalidInput(_)));
    }

    #[test]
    fn from_config_uses_default_model() {
        let cfg = OpenRouterConfig::builder()
            .default_model("anthropic/claude-3.5-sonnet")
            .build()
            .unwrap();
        let req =
            ChatCompletionRequest::from_config(&cfg, vec![ChatCompletionMessage::user("x")])
                .unwrap();
        assert_eq!(req.model, "anthropic/claude-3.5-sonnet");

        let err = ChatCompletionRequest::from_config(&OpenRouterConfig::default(), vec![])
            .unwrap_err();
        assert!(matches!(err, OpenRouterError::InvalidInput(_)));
    }
}
