//! Chat message types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::content::{ChatMessagePart, ContentRef, ContentValue};
use crate::error::OpenRouterError;
use crate::types::tools::ToolCall;

/// Message role
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    #[default]
    User,
    Assistant,
    Developer,
    Tool,
    /// Legacy function-call results
    Function,
}

impl ChatMessageRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Developer => "developer",
            Self::Tool => "tool",
            Self::Function => "function",
        }
    }
}

/// One turn of a conversation.
///
/// Content can be given two ways. `content_value` is the current representation
/// (plain string or ordered parts). `content` is the older plain-string field and
/// is kept for callers written before multi-part content existed. When `content`
/// is non-empty it is what gets sent, whatever `content_value` holds.
///
/// Serialized as `{"role":..,"content":..}`; `name`, `reasoning`, `tool_calls` and
/// `tool_call_id` follow only when set.
///
/// # Examples
///
/// ```rust
/// use siumai_openrouter::types::{ChatCompletionMessage, ChatMessagePart};
///
/// let msg = ChatCompletionMessage::user("Hello");
/// assert_eq!(msg.to_json().unwrap(), r#"{"role":"user","content":"Hello"}"#);
///
/// let msg = ChatCompletionMessage::user_multi(vec![
///     ChatMessagePart::text("Describe this"),
///     ChatMessagePart::image_url("https://example.com/cat.png"),
/// ]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatCompletionMessage {
    pub role: ChatMessageRole,
    /// Plain-string content; wins over `content_value` when non-empty
    #[deprecated(note = "use `content_value`; a non-empty `content` still takes precedence")]
    pub content: String,
    pub content_value: ContentValue,
    /// Participant name
    pub name: Option<String>,
    /// Reasoning text returned by thinking models
    pub reasoning: Option<String>,
    /// Tool calls requested by the assistant
    pub tool_calls: Vec<ToolCall>,
    /// Id of the tool call a `tool` message answers
    pub tool_call_id: Option<String>,
}

#[allow(deprecated)]
impl ChatCompletionMessage {
    pub fn new(role: ChatMessageRole, content: impl Into<ContentValue>) -> Self {
        Self {
            role,
            content_value: content.into(),
            ..Default::default()
        }
    }

    /// Creates a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatMessageRole::User, ContentValue::text(content))
    }

    /// Creates a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatMessageRole::System, ContentValue::text(content))
    }

    /// Creates an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatMessageRole::Assistant, ContentValue::text(content))
    }

    /// Creates a developer message
    pub fn developer(content: impl Into<String>) -> Self {
        Self::new(ChatMessageRole::Developer, ContentValue::text(content))
    }

    /// Creates a user message with multi-part content
    pub fn user_multi(parts: Vec<ChatMessagePart>) -> Self {
        Self::new(ChatMessageRole::User, ContentValue::multi(parts))
    }

    /// Creates a tool result message answering `tool_call_id`
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(tool_call_id.into()),
            ..Self::new(ChatMessageRole::Tool, ContentValue::text(content))
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = tool_calls;
        self
    }

    /// The content that is sent for this message.
    ///
    /// A non-empty `content` string takes precedence; otherwise `content_value`
    /// is used as-is.
    pub fn effective_content(&self) -> ContentRef<'_> {
        if !self.content.is_empty() {
            ContentRef::Text(&self.content)
        } else {
            self.content_value.view()
        }
    }

    /// Text of the effective content (text parts concatenated)
    pub fn text(&self) -> String {
        self.effective_content().to_text()
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }

    /// Encodes the message as a JSON string
    pub fn to_json(&self) -> Result<String, OpenRouterError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the message as JSON bytes
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, OpenRouterError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[allow(deprecated)]
impl Serialize for ChatCompletionMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        if !self.content.is_empty() && !self.content_value.is_empty() {
            tracing::debug!(
                role = self.role.as_str(),
                "deprecated `content` overrides `content_value`"
            );
        }

        let len = 2
            + usize::from(self.name.is_some())
            + usize::from(self.reasoning.is_some())
            + usize::from(!self.tool_calls.is_empty())
            + usize::from(self.tool_call_id.is_some());

        let mut st = serializer.serialize_struct("ChatCompletionMessage", len)?;
        st.serialize_field("role", &self.role)?;
        st.serialize_field("content", &self.effective_content())?;
        match &self.name {
            Some(name) => st.serialize_field("name", name)?,
            None => st.skip_field("name")?,
        }
        match &self.reasoning {
            Some(reasoning) => st.serialize_field("reasoning", reasoning)?,
            None => st.skip_field("reasoning")?,
        }
        if self.tool_calls.is_empty() {
            st.skip_field("tool_calls")?;
        } else {
            st.serialize_field("tool_calls", &self.tool_calls)?;
        }
        match &self.tool_call_id {
            Some(id) => st.serialize_field("tool_call_id", id)?,
            None => st.skip_field("tool_call_id")?,
        }
        st.end()
    }
}

#[allow(deprecated)]
impl<'de> Deserialize<'de> for ChatCompletionMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            role: ChatMessageRole,
            #[serde(default)]
            content: Option<ContentValue>,
            #[serde(default)]
            name: Option<String>,
            #[serde(default)]
            reasoning: Option<String>,
            #[serde(default)]
            tool_calls: Option<Vec<ToolCall>>,
            #[serde(default)]
            tool_call_id: Option<String>,
        }

        let wire = Wire::deserialize(deserializer)?;

        // Decoded content always lands in `content_value`.
        Ok(Self {
            role: wire.role,
            content: String::new(),
            content_value: wire.content.unwrap_or_default(),
            name: wire.name,
            reasoning: wire.reasoning,
            tool_calls: wire.tool_calls.unwrap_or_default(),
            tool_call_id: wire.tool_call_id,
        })
    }
}
