//! siumai-openrouter
//!
//! Wire types for the OpenRouter chat-completion API.
//!
//! This crate only owns the *shape* of requests and responses: chat messages,
//! multi-part content, tool schemas, and the JSON encoding rules the remote API
//! expects. HTTP transport, retries, streaming and authentication live with the
//! caller; the helpers here produce bytes to send and parse bytes received.
//!
//! ```rust
//! use siumai_openrouter::types::{ChatCompletionMessage, ChatMessagePart};
//!
//! let msg = ChatCompletionMessage::user_multi(vec![
//!     ChatMessagePart::text("What is in this image?"),
//!     ChatMessagePart::image_url("https://example.com/x.jpg"),
//! ]);
//! let json = msg.to_json().unwrap();
//! assert!(json.starts_with(r#"{"role":"user","content":["#));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod types;

pub use config::{OpenRouterConfig, OpenRouterConfigBuilder};
pub use error::{ErrorCategory, OpenRouterError};
