use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::models::{CreateItemDto, Item, ItemDeleteResponse, UpdateItemDto};

/// Errors surfaced by item operations
#[derive(Debug)]
pub enum ItemError {
    /// No item exists with the requested id
    NotFound,
    /// The backing store failed
    Storage(String),
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemError::NotFound => write!(f, "Item not found"),
            ItemError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for ItemError {}

impl From<sqlx::Error> for ItemError {
    fn from(e: sqlx::Error) -> Self {
        ItemError::Storage(e.to_string())
    }
}

/// Persistence primitives the item service consumes.
///
/// Each call is a single store round trip, atomic per call.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn create(&self, name: &str, price: Decimal) -> Result<Item, ItemError>;

    /// All items ordered by creation time, most recent first
    async fn find_many(&self) -> Result<Vec<Item>, ItemError>;

    async fn find_unique(&self, id: Uuid) -> Result<Option<Item>, ItemError>;

    /// Applies only the fields present in `patch`; `None` when no row matched
    async fn update(&self, id: Uuid, patch: &UpdateItemDto) -> Result<Option<Item>, ItemError>;

    /// `true` when a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, ItemError>;
}

/// CRUD semantics for items on top of an [`ItemStore`]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Persist a new item with a generated id and creation timestamp
    pub async fn create(&self, dto: CreateItemDto) -> Result<Item, ItemError> {
        let item = self.store.create(&dto.name, dto.price).await?;
        info!("Item '{}' created with id {}", item.name, item.id);
        Ok(item)
    }

    /// All items, most recently created first
    pub async fn find_all(&self) -> Result<Vec<Item>, ItemError> {
        self.store.find_many().await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Item, ItemError> {
        match self.store.find_unique(id).await? {
            Some(item) => Ok(item),
            None => Err(ItemError::NotFound),
        }
    }

    /// Partial update: fields absent from `patch` keep their stored values.
    ///
    /// The existence check and the mutation are separate store calls; a
    /// concurrent delete between them still surfaces as NotFound because the
    /// conditional update reports whether a row was touched.
    pub async fn update(&self, id: Uuid, patch: UpdateItemDto) -> Result<Item, ItemError> {
        self.find_one(id).await?;
        match self.store.update(id, &patch).await? {
            Some(item) => {
                info!("Item {} updated", item.id);
                Ok(item)
            }
            None => Err(ItemError::NotFound),
        }
    }

    /// Remove an item, confirming the deletion
    pub async fn remove(&self, id: Uuid) -> Result<ItemDeleteResponse, ItemError> {
        self.find_one(id).await?;
        if self.store.delete(id).await? {
            info!("Item {} deleted", id);
            Ok(ItemDeleteResponse { deleted: true })
        } else {
            Err(ItemError::NotFound)
        }
    }
}
