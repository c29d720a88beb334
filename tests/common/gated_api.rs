//! In-memory `ItemApi` whose calls can be held back per item id.

#![allow(dead_code)]

use async_trait::async_trait;
use itemdesk::api::ItemApi;
use itemdesk::http::ApiError;
use itemdesk::model::{Item, ItemId, ItemPatch, NewItem};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

/// Id used to gate `list` and `create`, which carry no item id.
pub const COLLECTION: ItemId = 0;

pub struct GatedApi {
    items: Mutex<Vec<Item>>,
    gates: Mutex<HashMap<ItemId, oneshot::Receiver<()>>>,
    calls: AtomicUsize,
}

impl GatedApi {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            gates: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Hold the next call for `id` until the returned sender fires (or is
    /// dropped).
    pub fn gate(&self, id: ItemId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(id, rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.lock().clone()
    }

    async fn enter(&self, id: ItemId) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().remove(&id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

fn not_found(id: ItemId) -> ApiError {
    ApiError::NotFound {
        path: format!("/{}", id),
    }
}

#[async_trait]
impl ItemApi for GatedApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.enter(COLLECTION).await;
        Ok(self.items())
    }

    async fn get(&self, id: ItemId) -> Result<Item, ApiError> {
        self.enter(id).await;
        self.items
            .lock()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, new: &NewItem) -> Result<Item, ApiError> {
        self.enter(COLLECTION).await;
        let mut items = self.items.lock();
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let mut item = super::item(id, &new.name);
        item.description = new.description.clone();
        items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, patch: &ItemPatch) -> Result<Item, ApiError> {
        self.enter(id).await;
        let mut items = self.items.lock();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| not_found(id))?;
        if let Some(name) = &patch.name {
            item.name = name.clone();
        }
        if let Some(description) = &patch.description {
            item.description = Some(description.clone());
        }
        item.updated_at = Some("2024-02-01T00:00:00Z".to_string());
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        self.enter(id).await;
        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
