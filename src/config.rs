//! Client-side configuration
//!
//! `OpenRouterConfig` holds the values a caller-owned transport needs to reach the
//! API: the endpoint root, an optional default model, and the optional attribution
//! headers OpenRouter uses for app rankings.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::OpenRouterError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// API root without a trailing slash
    pub base_url: String,
    /// Model used when a request does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    /// Sent as `HTTP-Referer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_referer: Option<String>,
    /// Sent as `X-Title`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_title: Option<String>,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            default_model: None,
            http_referer: None,
            app_title: None,
        }
    }
}

impl OpenRouterConfig {
    /// Returns a builder for constructing `OpenRouterConfig`
    pub fn builder() -> OpenRouterConfigBuilder {
        OpenRouterConfigBuilder::new()
    }

    /// Reads configuration from `OPENROUTER_*` environment variables.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Result<Self, OpenRouterError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, OpenRouterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = OpenRouterConfigBuilder::new();
        if let Some(url) = get(defaults::env::BASE_URL) {
            builder = builder.base_url(url);
        }
        if let Some(model) = get(defaults::env::MODEL) {
            builder = builder.default_model(model);
        }
        if let Some(referer) = get(defaults::env::HTTP_REFERER) {
            builder = builder.http_referer(referer);
        }
        if let Some(title) = get(defaults::env::APP_TITLE) {
            builder = builder.app_title(title);
        }
        builder.build()
    }

    /// Full URL of the chat-completion endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!("{}{}", self.base_url, defaults::CHAT_COMPLETIONS_PATH)
    }

    /// Attribution headers to attach to every request, in a stable order.
    pub fn attribution_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(referer) = &self.http_referer {
            headers.push((defaults::HTTP_REFERER_HEADER, referer.clone()));
        }
        if let Some(title) = &self.app_title {
            headers.push((defaults::APP_TITLE_HEADER, title.clone()));
        }
        headers
    }
}

/// Builder for [`OpenRouterConfig`]
#[derive(Debug, Clone, Default)]
pub struct OpenRouterConfigBuilder {
    base_url: Option<String>,
    default_model: Option<String>,
    http_referer: Option<String>,
    app_title: Option<String>,
}

impl OpenRouterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    pub fn http_referer(mut self, referer: impl Into<String>) -> Self {
        self.http_referer = Some(referer.into());
        self
    }

    pub fn app_title(mut self, title: impl Into<String>) -> Self {
        self.app_title = Some(title.into());
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<OpenRouterConfig, OpenRouterError> {
        let base_url = match self.base_url {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if url.is_empty() {
                    return Err(OpenRouterError::ConfigurationError(
                        "base_url must not be empty".to_string(),
                    ));
                }
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(OpenRouterError::ConfigurationError(format!(
                        "base_url must be an http(s) URL, got {url}"
                    )));
                }
                url
            }
            None => defaults::BASE_URL.to_string(),
        };

        Ok(OpenRouterConfig {
            base_url,
            default_model: self.default_model.filter(|m| !m.trim().is_empty()),
            http_referer: self.http_referer.filter(|v| !v.trim().is_empty()),
            app_title: self.app_title.filter(|v| !v.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_points_at_public_api() {
        let cfg = OpenRouterConfig::default();
        assert_eq!(
            cfg.chat_completions_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert!(cfg.attribution_headers().is_empty());
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let cfg = OpenRouterConfig::builder()
            .base_url("http://localhost:8080/v1/")
            .build()
            .unwrap();
        assert_eq!(
            cfg.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn builder_rejects_bad_base_url() {
        let err = OpenRouterConfig::builder().base_url("  ").build().unwrap_err();
        assert!(matches!(err, OpenRouterError::ConfigurationError(_)));

        let err = OpenRouterConfig::builder()
            .base_url("openrouter.ai/api/v1")
            .build()
            .unwrap_err();
        assert!(matches!(err, OpenRouterError::ConfigurationError(_)));
    }

    #[test]
    fn attribution_headers_keep_order() {
        let cfg = OpenRouterConfig::builder()
            .app_title("demo")
            .http_referer("https://example.com")
            .build()
            .unwrap();
        assert_eq!(
            cfg.attribution_headers(),
            vec![
                ("HTTP-Referer", "https://example.com".to_string()),
                ("X-Title", "demo".to_string()),
            ]
        );
    }

    #[test]
    fn blank_attribution_values_are_dropped() {
        let cfg = OpenRouterConfig::builder()
            .http_referer("")
            .app_title("   ")
            .build()
            .unwrap();
        assert_eq!(cfg.http_referer, None);
        assert_eq!(cfg.app_title, None);
        assert!(cfg.attribution_headers().is_empty());
    }

    #[test]
    fn lookup_ignores_empty_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("OPENROUTER_BASE_URL", ""),
            ("OPENROUTER_MODEL", "openai/gpt-4o"),
            ("OPENROUTER_APP_TITLE", "   "),
        ]);
        let cfg =
            OpenRouterConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(cfg.base_url, defaults::BASE_URL);
        assert_eq!(cfg.default_model.as_deref(), Some("openai/gpt-4o"));
        assert_eq!(cfg.app_title, None);
    }
}
