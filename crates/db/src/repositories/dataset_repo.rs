//! Repository for dataset items.

use perfdash_core::dataset::{self, Dataset, DatasetItem};
use perfdash_core::{keys, Item};

use crate::{DbResult, ItemStore};

/// Reads and writes [`Dataset`]s at `Dataset#<id>`.
pub struct DatasetRepo;

impl DatasetRepo {
    pub async fn find(store: &dyn ItemStore, dataset_id: &str) -> DbResult<Option<Dataset>> {
        let Some(item) = store.get(&keys::dataset_key(dataset_id)).await? else {
            return Ok(None);
        };
        let record: DatasetItem = item.into_record()?;
        Ok(Some(dataset::from_item(record)?))
    }

    pub async fn save(store: &dyn ItemStore, dataset: &Dataset) -> DbResult<()> {
        let item = Item::from_record(&dataset::to_item(dataset))?;
        store.put(item).await?;
        tracing::debug!(dataset_id = %dataset.id, "Dataset saved");
        Ok(())
    }

    /// Delete a dataset. Widgets referencing it are left untouched.
    pub async fn delete(store: &dyn ItemStore, dataset_id: &str) -> DbResult<bool> {
        store.delete(&keys::dataset_key(dataset_id)).await
    }
}
