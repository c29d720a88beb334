//! HTTP client adapter for the item backend.
//!
//! Every call gets the configured base URL, timeout, optional bearer token
//! and the fixed-delay [`RetryPolicy`].

mod client;
mod error;
mod retry;

pub use client::ApiClient;
pub use error::ApiError;
pub use reqwest::Method;
pub use retry::RetryPolicy;
