//! Tool calling and function definition types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tool kind. OpenRouter only defines function tools.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Function,
}

/// A tool the model may call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    #[serde(rename = "type", default)]
    pub tool_type: ToolType,
    pub function: FunctionDefinition,
}

impl Tool {
    /// Creates a function tool
    ///
    /// # Example
    ///
    /// ```rust
    /// use siumai_openrouter::types::Tool;
    /// use serde_json::json;
    ///
    /// let tool = Tool::function(
    ///     "get_weather",
    ///     "Get the weather for a location",
    ///     json!({"type": "object", "properties": {"location": {"type": "string"}}}),
    /// );
    /// ```
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDefinition {
                name: name.into(),
                description: Some(description.into()),
                parameters: Some(parameters),
            },
        }
    }
}

/// Function schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema of the arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

/// A tool call emitted by the assistant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default)]
    pub call_type: ToolType,
    pub function: FunctionCall,
}

impl ToolCall {
    pub fn function(id: impl Into<String>, function: FunctionCall) -> Self {
        Self {
            id: id.into(),
            call_type: ToolType::Function,
            function,
        }
    }
}

/// Function name plus JSON-encoded arguments, as produced by the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    /// Raw argument string; models may emit invalid JSON here
    #[serde(default)]
    pub arguments: String,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// Parses `arguments` as JSON
    pub fn parse_arguments(&self) -> Result<serde_json::Value, crate::error::OpenRouterError> {
        if self.arguments.trim().is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }
        Ok(serde_json::from_str(&self.arguments)?)
    }
}

/// How the model should pick tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolChoice {
    None,
    Auto,
    Required,
    /// Force a specific function
    Function { name: String },
}

impl Serialize for ToolChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::None => serializer.serialize_str("none"),
            Self::Auto => serializer.serialize_str("auto"),
            Self::Required => serializer.serialize_str("required"),
            Self::Function { name } => {
                #[derive(Serialize)]
                struct Named<'a> {
                    name: &'a str,
                }

                #[derive(Serialize)]
                struct Forced<'a> {
                    #[serde(rename = "type")]
                    kind: ToolType,
                    function: Named<'a>,
                }

                Forced {
                    kind: ToolType::Function,
                    function: Named { name },
                }
                .serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for ToolChoice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Named {
            name: String,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Mode(String),
            Function { function: Named },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Mode(mode) => match mode.as_str() {
                "none" => Ok(Self::None),
                "auto" => Ok(Self::Auto),
                "required" => Ok(Self::Required),
                other => Err(serde::de::Error::unknown_variant(
                    other,
                    &["none", "auto", "required"],
                )),
            },
            Repr::Function { function } => Ok(Self::Function {
                name: function.name,
            }),
        }
    }
}
