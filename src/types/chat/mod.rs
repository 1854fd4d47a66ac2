//! Chat-related types

pub mod content;
pub mod message;
pub mod request;
pub mod response;

pub use content::{ChatMessagePart, ContentRef, ContentValue, ImageDetail, ImageUrl};
pub use message::{ChatCompletionMessage, ChatMessageRole};
pub use request::{ChatCompletionRequest, ResponseFormat};
pub use response::{
    ApiErrorBody, ApiErrorResponse, ChatCompletionChoice, ChatCompletionResponse, FinishReason,
    parse_chat_response,
};
