//! Request builders for the item resource.
//!
//! The functions are generic over payload and response shape; [`RestItemApi`]
//! fixes them to the item types for the effect coordinator.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::{ApiClient, ApiError, Method};
use crate::model::{Item, ItemId, ItemPatch, NewItem};

/// `GET /` on the collection.
pub async fn fetch_items<T: DeserializeOwned>(client: &ApiClient) -> Result<T, ApiError> {
    client.send_json(Method::GET, "", None::<&()>).await
}

/// `GET /{id}`. A 404 surfaces as [`ApiError::NotFound`].
pub async fn get_item<T: DeserializeOwned>(client: &ApiClient, id: ItemId) -> Result<T, ApiError> {
    client
        .send_json(Method::GET, &item_path(id), None::<&()>)
        .await
}

/// `POST /` with the full payload.
pub async fn add_item<T, D>(client: &ApiClient, data: &D) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    D: Serialize + ?Sized,
{
    client.send_json(Method::POST, "", Some(data)).await
}

/// `PATCH /{id}` with the changed fields only.
pub async fn update_item<T, D>(client: &ApiClient, id: ItemId, data: &D) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    D: Serialize + ?Sized,
{
    client
        .send_json(Method::PATCH, &item_path(id), Some(data))
        .await
}

/// `DELETE /{id}`.
pub async fn delete_item<T: DeserializeOwned>(
    client: &ApiClient,
    id: ItemId,
) -> Result<T, ApiError> {
    client
        .send_json(Method::DELETE, &item_path(id), None::<&()>)
        .await
}

fn item_path(id: ItemId) -> String {
    format!("/{}", id)
}

/// The five item operations as one seam.
#[async_trait]
pub trait ItemApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>, ApiError>;

    async fn get(&self, id: ItemId) -> Result<Item, ApiError>;

    async fn create(&self, item: &NewItem) -> Result<Item, ApiError>;

    async fn update(&self, id: ItemId, patch: &ItemPatch) -> Result<Item, ApiError>;

    async fn delete(&self, id: ItemId) -> Result<(), ApiError>;
}

/// [`ItemApi`] over the REST backend.
#[derive(Debug, Clone)]
pub struct RestItemApi {
    client: ApiClient,
}

impl RestItemApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl ItemApi for RestItemApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        fetch_items(&self.client).await
    }

    async fn get(&self, id: ItemId) -> Result<Item, ApiError> {
        get_item(&self.client, id).await
    }

    async fn create(&self, item: &NewItem) -> Result<Item, ApiError> {
        add_item(&self.client, item).await
    }

    async fn update(&self, id: ItemId, patch: &ItemPatch) -> Result<Item, ApiError> {
        update_item(&self.client, id, patch).await
    }

    async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        // Acknowledgement body is ignored; any JSON (or none) is accepted.
        delete_item::<serde_json::Value>(&self.client, id)
            .await
            .map(|_| ())
    }
}
