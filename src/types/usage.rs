//! Token usage

use serde::{Deserialize, Serialize};

/// Token accounting for one completion
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
    /// Credits charged, when usage accounting is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}
