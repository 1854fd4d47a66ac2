use serde::{Deserialize, Serialize};

use crate::error::OpenRouterError;

/// One element of multi-part message content.
///
/// Serialized with a `type` discriminator:
///
/// - `{"type":"text","text":"..."}`
/// - `{"type":"image_url","image_url":{"url":"..."}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatMessagePart {
    /// Text content
    Text { text: String },

    /// Image reference (remote URL or `data:` URL)
    ImageUrl { image_url: ImageUrl },

    /// A part type this crate does not model (e.g. `file`, `input_audio`).
    ///
    /// Only produced when decoding replies; its payload is dropped and it cannot
    /// be serialized.
    #[serde(other, skip_serializing)]
    Unsupported,
}

impl ChatMessagePart {
    /// Create a text content part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image content part from URL
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: None,
            },
        }
    }

    /// Create an image content part from URL with detail level
    pub fn image_url_with_detail(url: impl Into<String>, detail: ImageDetail) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: Some(detail),
            },
        }
    }

    /// Create an image content part from raw image bytes.
    ///
    /// The bytes are embedded as a `data:<mime>;base64,...` URL. The MIME type is
    /// sniffed from the payload; anything that is not a recognizable image is
    /// rejected.
    pub fn image_bytes(data: &[u8]) -> Result<Self, OpenRouterError> {
        let mime = infer::get(data)
            .filter(|_| infer::is_image(data))
            .map(|kind| kind.mime_type())
            .ok_or_else(|| {
                OpenRouterError::InvalidInput(
                    "image data has an unrecognized or non-image format".to_string(),
                )
            })?;

        use base64::{Engine, engine::general_purpose::STANDARD};
        Ok(Self::image_url(format!(
            "data:{mime};base64,{}",
            STANDARD.encode(data)
        )))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::ImageUrl { .. })
    }

    /// Text of a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::ImageUrl { .. } | Self::Unsupported => None,
        }
    }
}

/// Image reference payload of an `image_url` part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
    /// Optional detail level (for models that support it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

/// Image detail level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Auto,
    Low,
    High,
}

impl From<&str> for ImageDetail {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => ImageDetail::Low,
            "high" => ImageDetail::High,
            _ => ImageDetail::Auto,
        }
    }
}
