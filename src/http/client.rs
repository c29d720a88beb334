use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{build_auth_header, Config, TokenSource};
use crate::http::error::ApiError;
use crate::http::retry::RetryPolicy;

/// Outbound client bound to one base URL.
///
/// Cheap to clone; clones share the connection pool and token source.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
    auth_enabled: bool,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenSource>) -> Result<Self, ApiError> {
        let timeout = Duration::from_millis(config.api.timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            timeout,
            retry: RetryPolicy::from(&config.api),
            auth_enabled: config.auth.enabled,
            tokens,
        })
    }

    /// Override the retry policy (tests, one-shot CLI calls).
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Absolute URL for a path relative to the base URL (`""`, `"/7"`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the JSON response body.
    ///
    /// An empty body decodes as JSON `null`, so `()` and
    /// `serde_json::Value` work for bodiless acknowledgements.
    pub async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.send(method, path, body).await?;
        let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        serde_json::from_slice(bytes).map_err(|source| ApiError::Decode { source })
    }

    /// Send a request, retrying per the policy, and return the raw body of
    /// the first successful attempt.
    ///
    /// After the retry budget is spent the last attempt's error is returned.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut retries_done = 0;

        loop {
            tracing::debug!(
                method = %method,
                url = %url,
                attempt = retries_done + 1,
                "Sending request"
            );

            let err = match self.attempt(&method, &url, path, body).await {
                Ok(bytes) => return Ok(bytes),
                Err(err) => err,
            };

            if !self.retry.should_retry(&method, retries_done) {
                tracing::error!(
                    method = %method,
                    url = %url,
                    attempts = retries_done + 1,
                    error_type = err.error_type(),
                    error = %err,
                    "Request failed"
                );
                return Err(err);
            }

            retries_done += 1;
            tracing::warn!(
                method = %method,
                url = %url,
                retry = retries_done,
                max_retries = self.retry.max_retries,
                delay_ms = self.retry.delay.as_millis() as u64,
                error = %err,
                "Request failed, retrying"
            );
            tokio::time::sleep(self.retry.delay).await;
        }
    }

    async fn attempt<B>(
        &self,
        method: &Method,
        url: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some((name, value)) = build_auth_header(self.auth_enabled, self.tokens.as_ref()) {
            builder = builder.header(name, value);
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                path: path.to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(bytes.to_vec())
    }

    fn transport_error(&self, source: reqwest::Error) -> ApiError {
        if source.is_timeout() {
            ApiError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            ApiError::Network { source }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("auth_enabled", &self.auth_enabled)
            .finish()
    }
}
