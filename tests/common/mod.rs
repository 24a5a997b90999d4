// Common test utilities for integration tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use portfolio_items::models::{Item, UpdateItemDto};
use portfolio_items::services::{ItemError, ItemService, ItemStore};

/// In-memory ItemStore so tests run without a database
#[derive(Default)]
pub struct MemoryItemStore {
    items: Mutex<Vec<Item>>,
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, name: &str, price: Decimal) -> Result<Item, ItemError> {
        let mut items = self.items.lock().unwrap();
        // Spread creation timestamps so ordering does not depend on clock resolution
        let created_at = Utc::now() + Duration::milliseconds(items.len() as i64);
        let item = Item {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            created_at,
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn find_many(&self) -> Result<Vec<Item>, ItemError> {
        let mut items = self.items.lock().unwrap().clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_unique(&self, id: Uuid) -> Result<Option<Item>, ItemError> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn update(&self, id: Uuid, patch: &UpdateItemDto) -> Result<Option<Item>, ItemError> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                if let Some(name) = &patch.name {
                    item.name = name.clone();
                }
                if let Some(price) = patch.price {
                    item.price = price;
                }
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ItemError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }
}

/// Creates an item service backed by an in-memory store
pub fn memory_item_service() -> Arc<ItemService> {
    Arc::new(ItemService::new(Arc::new(MemoryItemStore::default())))
}
