mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{SecureString, TokenSource, TokenStore};
pub use loader::{
    ConfigError, ENV_API_RETRY_COUNT, ENV_API_RETRY_DELAY, ENV_API_TIMEOUT, ENV_API_URL,
    ENV_AUTH_TOKEN, ENV_OPEN_ID,
};
pub use types::{ApiConfig, AuthConfig, Config};
