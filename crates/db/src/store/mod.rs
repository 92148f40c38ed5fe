//! The item store: get/put/delete/query over `(pk, sk)`-keyed items.

mod memory;
mod pg;

use async_trait::async_trait;
use perfdash_core::{Item, ItemKey};

use crate::DbResult;

pub use memory::MemoryItemStore;
pub use pg::PgItemStore;

/// A single-table key-value store.
///
/// Writes are last-writer-wins per item; there is no cross-item
/// transaction.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn get(&self, key: &ItemKey) -> DbResult<Option<Item>>;

    /// Insert or replace the item at `item.key()`.
    async fn put(&self, item: Item) -> DbResult<()>;

    /// Remove an item. Returns `false` if nothing was stored at `key`.
    async fn delete(&self, key: &ItemKey) -> DbResult<bool>;

    /// All items under partition key `pk`, ordered by sort key.
    async fn query(&self, pk: &str) -> DbResult<Vec<Item>>;
}
