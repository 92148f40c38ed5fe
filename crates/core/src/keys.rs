//! Composite key codec for the single-table item store.
//!
//! Every item is placed by a `(pk, sk)` pair. Identity of one entity is
//! embedded in another's key to express containment: all widgets of a
//! dashboard share `pk = "Dashboard#<dashboard_id>"`. This is the only
//! module that builds or takes apart key strings.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub const DATASET_PREFIX: &str = "Dataset#";
pub const DASHBOARD_PREFIX: &str = "Dashboard#";
pub const WIDGET_PREFIX: &str = "Widget#";

/// A `(partition key, sort key)` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub pk: String,
    pub sk: String,
}

impl ItemKey {
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
        }
    }
}

/// Key of a dataset item; both parts are `"Dataset#" + id`.
pub fn dataset_key(dataset_id: &str) -> ItemKey {
    let key = format!("{DATASET_PREFIX}{dataset_id}");
    ItemKey::new(key.clone(), key)
}

/// Partition key shared by every widget of a dashboard.
pub fn widget_partition_key(dashboard_id: &str) -> String {
    format!("{DASHBOARD_PREFIX}{dashboard_id}")
}

pub fn widget_sort_key(widget_id: &str) -> String {
    format!("{WIDGET_PREFIX}{widget_id}")
}

pub fn widget_key(dashboard_id: &str, widget_id: &str) -> ItemKey {
    ItemKey::new(
        widget_partition_key(dashboard_id),
        widget_sort_key(widget_id),
    )
}

pub fn extract_dataset_id(key: &str) -> CoreResult<&str> {
    strip_prefix(key, DATASET_PREFIX)
}

pub fn extract_dashboard_id(pk: &str) -> CoreResult<&str> {
    strip_prefix(pk, DASHBOARD_PREFIX)
}

pub fn extract_widget_id(sk: &str) -> CoreResult<&str> {
    strip_prefix(sk, WIDGET_PREFIX)
}

/// Strip `prefix` from `key`. A missing prefix or an empty remainder is a
/// malformed key.
fn strip_prefix<'a>(key: &'a str, prefix: &'static str) -> CoreResult<&'a str> {
    match key.strip_prefix(prefix) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(CoreError::MalformedKey {
            expected: prefix,
            key: key.to_string(),
        }),
    }
}
