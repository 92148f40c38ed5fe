//! Dataset entity and its item mapping.
//!
//! A dataset is an uploaded file plus its derived JSON form, addressed by
//! two object-storage keys. Datasets are owned independently of dashboards
//! and referenced weakly from chart and table widgets by `dataset_id`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CoreError, CoreResult};
use crate::ids::{self, IdSource, UuidIdSource};
use crate::item::DATASET_ITEM_TYPE;
use crate::keys;
use crate::types::{self, EntityId, Timestamp};

/// How a dataset entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceType {
    #[default]
    FileUpload,
    IngestApi,
}

/// Object-storage locations of the original upload and its JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct S3Key {
    #[validate(length(min = 1, message = "s3Key.raw must not be empty"))]
    pub raw: String,
    #[validate(length(min = 1, message = "s3Key.json must not be empty"))]
    pub json: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: EntityId,
    pub file_name: String,
    pub created_by: String,
    pub s3_key: S3Key,
    pub updated_at: Option<Timestamp>,
    pub source_type: SourceType,
}

/// Upload metadata used to register a new dataset. Doubles as the
/// registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    #[validate(length(min = 1, message = "fileName must not be empty"))]
    pub file_name: String,
    #[validate(length(min = 1, message = "createdBy must not be empty"))]
    pub created_by: String,
    #[validate(nested)]
    pub s3_key: S3Key,
    #[serde(default)]
    pub source_type: SourceType,
}

/// Persisted form of a [`Dataset`].
///
/// `updated_at` and `source_type` are optional because items written
/// before those attributes existed lack them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetItem {
    pub pk: String,
    pub sk: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub created_by: String,
    pub file_name: String,
    pub s3_key: S3Key,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

/// Builds new datasets with identifiers from `I`.
#[derive(Debug, Clone, Default)]
pub struct DatasetFactory<I = UuidIdSource> {
    ids: I,
}

impl DatasetFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource> DatasetFactory<I> {
    pub fn with_ids(ids: I) -> Self {
        Self { ids }
    }

    /// Register a fresh dataset. Fields are copied verbatim; the caller
    /// guarantees they are present.
    pub fn create_new(&self, info: DatasetInfo) -> CoreResult<Dataset> {
        Ok(Dataset {
            id: ids::fresh_id(&self.ids)?,
            file_name: info.file_name,
            created_by: info.created_by,
            s3_key: info.s3_key,
            updated_at: Some(types::now()),
            source_type: info.source_type,
        })
    }
}

/// Rebuild a dataset from its stored item.
///
/// Missing-attribute defaults, applied here and only here:
/// - `updatedAt` absent: current time.
/// - `sourceType` absent: [`SourceType::FileUpload`].
pub fn from_item(item: DatasetItem) -> CoreResult<Dataset> {
    if item.item_type != DATASET_ITEM_TYPE {
        return Err(CoreError::MalformedItem(format!(
            "Expected item type '{DATASET_ITEM_TYPE}', got '{}'",
            item.item_type
        )));
    }

    let id = keys::extract_dataset_id(&item.pk)?;
    let sort_id = keys::extract_dataset_id(&item.sk)?;
    if id != sort_id {
        return Err(CoreError::MalformedKey {
            expected: keys::DATASET_PREFIX,
            key: item.sk.clone(),
        });
    }

    let updated_at = types::parse_or_now(item.updated_at.as_deref())?;
    let source_type = item.source_type.unwrap_or_default();

    Ok(Dataset {
        id: id.to_string(),
        file_name: item.file_name,
        created_by: item.created_by,
        s3_key: item.s3_key,
        updated_at: Some(updated_at),
        source_type,
    })
}

/// Build the stored item for `dataset`. An unset timestamp is written as
/// the current time.
pub fn to_item(dataset: &Dataset) -> DatasetItem {
    let key = keys::dataset_key(&dataset.id);
    let updated_at = dataset.updated_at.unwrap_or_else(types::now);

    DatasetItem {
        pk: key.pk,
        sk: key.sk,
        item_type: DATASET_ITEM_TYPE.to_string(),
        created_by: dataset.created_by.clone(),
        file_name: dataset.file_name.clone(),
        s3_key: dataset.s3_key.clone(),
        updated_at: Some(types::to_iso_string(&updated_at)),
        source_type: Some(dataset.source_type),
    }
}
