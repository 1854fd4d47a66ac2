use serde::{Deserialize, Serialize};

use super::ChatMessagePart;

/// Message content: a plain string or an ordered list of parts.
///
/// On the wire this is either a bare JSON string or a JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContentValue {
    /// Plain text
    Simple(String),
    /// Ordered multi-part content (text and images)
    MultiPart(Vec<ChatMessagePart>),
}

impl Default for ContentValue {
    fn default() -> Self {
        Self::Simple(String::new())
    }
}

impl ContentValue {
    /// Simple string content
    pub fn text(text: impl Into<String>) -> Self {
        Self::Simple(text.into())
    }

    /// Multi-part content; part order is kept as given
    pub fn multi(parts: Vec<ChatMessagePart>) -> Self {
        Self::MultiPart(parts)
    }

    /// `true` for an empty string or an empty part list
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Simple(text) => text.is_empty(),
            Self::MultiPart(parts) => parts.is_empty(),
        }
    }

    pub fn view(&self) -> ContentRef<'_> {
        match self {
            Self::Simple(text) => ContentRef::Text(text),
            Self::MultiPart(parts) => ContentRef::Parts(parts),
        }
    }
}

impl From<String> for ContentValue {
    fn from(text: String) -> Self {
        Self::Simple(text)
    }
}

impl From<&str> for ContentValue {
    fn from(text: &str) -> Self {
        Self::Simple(text.to_string())
    }
}

impl From<Vec<ChatMessagePart>> for ContentValue {
    fn from(parts: Vec<ChatMessagePart>) -> Self {
        Self::MultiPart(parts)
    }
}

/// Borrowed view of the content that is actually sent for a message.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ContentRef<'a> {
    Text(&'a str),
    Parts(&'a [ChatMessagePart]),
}

impl ContentRef<'_> {
    /// Text of the content; text parts are concatenated, other parts skipped.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::Parts(parts) => parts
                .iter()
                .filter_map(ChatMessagePart::as_text)
                .collect::<String>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_empty_simple() {
        assert_eq!(ContentValue::default(), ContentValue::Simple(String::new()));
        assert!(ContentValue::default().is_empty());
        assert!(ContentValue::multi(vec![]).is_empty());
        assert!(!ContentValue::text("x").is_empty());
    }

    #[test]
    fn decodes_string_or_array() {
        let v: ContentValue = serde_json::from_value(json!("hello")).unwrap();
        assert_eq!(v, ContentValue::text("hello"));

        let v: ContentValue =
            serde_json::from_value(json!([{"type": "text", "text": "a"}])).unwrap();
        assert_eq!(v, ContentValue::multi(vec![ChatMessagePart::text("a")]));
    }

    #[test]
    fn to_text_concatenates_text_parts() {
        let v = ContentValue::multi(vec![
            ChatMessagePart::text("one"),
            ChatMessagePart::image_url("https://a/b.png"),
            ChatMessagePart::text("two"),
        ]);
        assert_eq!(v.view().to_text(), "onetwo");
    }

    #[test]
    fn array_with_unknown_part_still_decodes() {
        let v: ContentValue = serde_json::from_value(json!([
            {"type": "text", "text": "see attached"},
            {"type": "file", "file": {"filename": "a.pdf", "file_data": "data:..."}}
        ]))
        .unwrap();
        assert_eq!(
            v,
            ContentValue::multi(vec![
                ChatMessagePart::text("see attached"),
                ChatMessagePart::Unsupported,
            ])
        );
        assert_eq!(v.view().to_text(), "see attached");
    }
}
