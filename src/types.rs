//! Core Data Type Definitions
//!
//! ## Module Organization
//!
//! - **`chat/`** - Messages, multi-part content, requests and responses
//! - **`tools`** - Function tool schemas, tool calls and tool choice
//! - **`usage`** - Token accounting returned with a completion
//!
//! Everything is re-exported from this module:
//!
//! ```rust
//! use siumai_openrouter::types::{ChatCompletionMessage, ChatCompletionRequest, ContentValue};
//! ```

pub mod chat;
pub mod tools;
pub mod usage;

pub use chat::*;
pub use tools::*;
pub use usage::*;
