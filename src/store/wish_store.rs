use super::error::StorageError;
use super::storage::Storage;
use crate::wish::{WishId, WishItem, WishList};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Key under which the serialized list is stored
pub const DEFAULT_STORAGE_KEY: &str = "wishlist_items_v1";

/// Owns the in-memory wish list and keeps its persisted copy in step.
///
/// The in-memory list is authoritative. Every mutation is followed by a full
/// save; when that save fails the mutation still stands and the error is
/// returned so the caller can tell the user the change is not durable.
pub struct WishStore {
    storage: Arc<dyn Storage>,
    key: String,
    items: WishList,
}

impl WishStore {
    /// A store with an empty list; nothing is read from `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            key: DEFAULT_STORAGE_KEY.to_string(),
            items: WishList::new(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Create a store and populate it from the persisted list.
    pub async fn open(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage).with_key(key);
        store.items = store.load().await;
        info!("Loaded {} wishes", store.items.len());
        store
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn items(&self) -> &WishList {
        &self.items
    }

    /// Read the persisted list.
    ///
    /// Missing data yields an empty list. Unreadable or unparsable data is
    /// logged and also yields an empty list; it never blocks startup.
    pub async fn load(&self) -> WishList {
        match self.try_load().await {
            Ok(list) => list,
            Err(e) => {
                warn!("Discarding stored wish list under '{}': {e}", self.key);
                WishList::new()
            }
        }
    }

    /// Read the persisted list, reporting read and parse failures.
    pub async fn try_load(&self) -> Result<WishList, StorageError> {
        let Some(raw) = self.storage.get(&self.key).await? else {
            debug!("No stored wish list under '{}'", self.key);
            return Ok(WishList::new());
        };
        let items: Vec<WishItem> =
            serde_json::from_str(&raw).map_err(StorageError::CorruptData)?;
        let (list, dropped) = WishList::from_items(items);
        if dropped > 0 {
            warn!("Dropped {dropped} stored wishes with duplicate ids");
        }
        Ok(list)
    }

    /// Serialize `list` and write it in one piece.
    pub async fn save(&self, list: &WishList) -> Result<(), StorageError> {
        let json = serde_json::to_string(list).map_err(StorageError::SerializeError)?;
        self.storage.set(&self.key, &json).await.map_err(|e| {
            error!("Failed to save wish list: {e}");
            e
        })
    }

    /// Put `item` at the front of the list, then save.
    pub async fn insert(&mut self, item: WishItem) -> Result<(), StorageError> {
        info!(id = %item.id, "Adding wish");
        self.items.prepend(item);
        self.save(&self.items).await
    }

    /// Drop the item with `id` if present, then save. An unknown id leaves
    /// the list unchanged but still saves.
    pub async fn remove(&mut self, id: &WishId) -> Result<(), StorageError> {
        match self.items.remove(id) {
            Some(_) => info!(%id, "Removed wish"),
            None => debug!(%id, "No wish to remove"),
        }
        self.save(&self.items).await
    }
}

impl std::fmt::Debug for WishStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishStore")
            .field("key", &self.key)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "wish_store_tests.rs"]
mod tests;
