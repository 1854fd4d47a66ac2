//! Type Conversions for OpenRouterError

use super::types::OpenRouterError;

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for OpenRouterError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::api_error(status.as_u16(), err.to_string()),
            None => Self::HttpError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for OpenRouterError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: OpenRouterError = json_err.into();
        assert!(matches!(err, OpenRouterError::JsonError(_)));
    }
}
