use std::collections::BTreeMap;

use async_trait::async_trait;
use perfdash_core::{Item, ItemKey};
use tokio::sync::RwLock;

use crate::{DbResult, ItemStore};

/// In-process [`ItemStore`] for tests and local development.
///
/// Items are kept in a `BTreeMap` ordered by `(pk, sk)`, so a partition
/// query is a contiguous range in sort-key order.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<BTreeMap<ItemKey, Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn get(&self, key: &ItemKey) -> DbResult<Option<Item>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn put(&self, item: Item) -> DbResult<()> {
        self.items.write().await.insert(item.key(), item);
        Ok(())
    }

    async fn delete(&self, key: &ItemKey) -> DbResult<bool> {
        Ok(self.items.write().await.remove(key).is_some())
    }

    async fn query(&self, pk: &str) -> DbResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .range(ItemKey::new(pk, "")..)
            .take_while(|(key, _)| key.pk == pk)
            .map(|(_, item)| item.clone())
            .collect())
    }
}
