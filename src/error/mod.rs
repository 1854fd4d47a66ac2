//! Error handling types for siumai-openrouter.
//!
//! This module is intentionally dependency-light: every fallible operation in the
//! crate returns [`OpenRouterError`].

mod conversions;
pub mod types;

pub use types::*;
