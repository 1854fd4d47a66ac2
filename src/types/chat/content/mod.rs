//! Content types for chat messages

mod part;
mod value;

pub use part::{ChatMessagePart, ImageDetail, ImageUrl};
pub use value::{ContentRef, ContentValue};
