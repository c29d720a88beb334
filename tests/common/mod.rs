//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod gated_api;
pub mod mock_backend;

use itemdesk::config::{Config, TokenStore};
use itemdesk::http::{ApiClient, RetryPolicy};
use itemdesk::model::{Item, ItemId};
use std::sync::Arc;
use std::time::Duration;

/// An item as the backend would return it.
pub fn item(id: ItemId, name: &str) -> Item {
    Item {
        id,
        name: name.to_string(),
        description: None,
        created_by: "tester".to_string(),
        created_at: "2024-01-01T10:00:00Z".to_string(),
        updated_at: None,
        deleted_at: None,
    }
}

/// Wire JSON for [`item`].
pub fn item_json(id: ItemId, name: &str) -> String {
    serde_json::to_string(&item(id, name)).unwrap()
}

pub fn items_json(items: &[(ItemId, &str)]) -> String {
    let items: Vec<Item> = items.iter().map(|(id, name)| item(*id, name)).collect();
    serde_json::to_string(&items).unwrap()
}

/// Config pointed at `base_url` with fast retries.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_ms = 1000;
    config.api.retry_count = 2;
    config.api.retry_delay_ms = 20;
    config
}

pub fn client(config: &Config) -> ApiClient {
    ApiClient::new(config, Arc::new(TokenStore::new(config.auth.token.clone()))).unwrap()
}

/// Client without retries, for tests that count requests exactly.
pub fn client_without_retry(base_url: &str) -> ApiClient {
    client(&test_config(base_url)).with_retry(RetryPolicy::none())
}

pub const SHORT_WAIT: Duration = Duration::from_millis(50);
