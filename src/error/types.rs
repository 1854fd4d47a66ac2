//! Core error types

use thiserror::Error;

/// Coarse error classification, useful for deciding how to surface a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request was rejected by the API because of the caller (4xx).
    Client,
    /// The API or an upstream provider failed (5xx).
    Server,
    /// JSON could not be encoded or decoded.
    Parsing,
    /// Caller input or configuration was rejected before anything was sent.
    Validation,
    /// Transport-level failure reported by a caller-owned HTTP client.
    Network,
}

/// Error type for OpenRouter request construction and response parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpenRouterError {
    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The API answered with an error body
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        /// Provider-specific `metadata` object, when present
        details: Option<serde_json::Value>,
    },

    /// Caller input was rejected before encoding
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration is incomplete or malformed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Transport error from a caller-owned `reqwest` client
    #[cfg(feature = "reqwest")]
    #[error("HTTP error: {0}")]
    HttpError(String),
}

impl OpenRouterError {
    /// Creates an API error without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// HTTP-like status code carried by the error, if any.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::JsonError(_) => ErrorCategory::Parsing,
            Self::ApiError { code, .. } if *code >= 500 => ErrorCategory::Server,
            Self::ApiError { .. } => ErrorCategory::Client,
            Self::InvalidInput(_) | Self::ConfigurationError(_) => ErrorCategory::Validation,
            #[cfg(feature = "reqwest")]
            Self::HttpError(_) => ErrorCategory::Network,
        }
    }

    /// Whether sending the same request again may succeed.
    ///
    /// Only timeouts (408), rate limits (429), server-side failures and transport
    /// errors qualify; encoding and validation errors are deterministic.
    pub const fn is_retryable(&self) -> bool {
        match self.category() {
            ErrorCategory::Server | ErrorCategory::Network => true,
            ErrorCategory::Client => matches!(self.status_code(), Some(408) | Some(429)),
            ErrorCategory::Parsing | ErrorCategory::Validation => false,
        }
    }
}
