use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Connection settings for the item backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection URL of the item resource (e.g., "https://api.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-attempt request timeout in milliseconds (default: 5000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Retries after the first failed attempt (default: 2).
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    /// Fixed pause between attempts in milliseconds (default: 1000).
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Whether POST requests are retried like every other verb (default: true).
    #[serde(default = "default_retry_mutations")]
    pub retry_mutations: bool,
}

/// Bearer token attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Attach `Authorization: Bearer` when a token is available.
    #[serde(default)]
    pub enabled: bool,
    /// Initial token. Usually supplied through `ITEMDESK_AUTH_TOKEN` instead.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "https://api.example.com".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_retry_count() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_retry_mutations() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            retry_count: default_retry_count(),
            retry_delay_ms: default_retry_delay_ms(),
            retry_mutations: default_retry_mutations(),
        }
    }
}
