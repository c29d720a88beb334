//! Error types for calls against the item backend.

use thiserror::Error;

/// Errors surfaced by the HTTP client adapter.
///
/// `Display` is the human-readable message that ends up in the store's
/// `last_action_error`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u64 },

    /// Connection refused, DNS failure, reset, ...
    #[error("Network Error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered 404 for the requested path
    #[error("Request failed with status code 404")]
    NotFound { path: String },

    /// Backend answered with any other non-2xx status
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("Invalid response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status code for status-derived errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Short classification for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client { .. } => "client_error",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Network { .. } => "network_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

fn status_text(status: &u16, message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        format!("Request failed with status code {}", status)
    } else {
        format!("Request failed with status code {}: {}", status, message)
    }
}
