//! Default values shared across the crate.

/// Public OpenRouter API root.
pub const BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Path of the chat-completion endpoint, relative to the API root.
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Attribution header carrying the calling site URL.
pub const HTTP_REFERER_HEADER: &str = "HTTP-Referer";

/// Attribution header carrying the calling application name.
pub const APP_TITLE_HEADER: &str = "X-Title";

/// Environment variables read by [`crate::OpenRouterConfig::from_env`].
pub mod env {
    pub const BASE_URL: &str = "OPENROUTER_BASE_URL";
    pub const MODEL: &str = "OPENROUTER_MODEL";
    pub const HTTP_REFERER: &str = "OPENROUTER_HTTP_REFERER";
    pub const APP_TITLE: &str = "OPENROUTER_APP_TITLE";
}
