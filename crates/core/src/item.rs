//! The flat, store-native item shape shared by every entity kind.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::keys::ItemKey;

/// `type` discriminator of dataset items.
pub const DATASET_ITEM_TYPE: &str = "Dataset";

/// `type` discriminator of widget items.
pub const WIDGET_ITEM_TYPE: &str = "Widget";

/// A persisted item: `{ pk, sk, type, ...attributes }`.
///
/// Attribute values are item-safe JSON primitives, timestamps included
/// (as ISO-8601 strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub pk: String,
    pub sk: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.pk.clone(), self.sk.clone())
    }

    /// Flatten a typed record (`WidgetItem`, `DatasetItem`) into a generic item.
    pub fn from_record<T: Serialize>(record: &T) -> CoreResult<Self> {
        let value = serde_json::to_value(record)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize item: {e}")))?;
        serde_json::from_value(value)
            .map_err(|e| CoreError::Internal(format!("Record is not a flat item: {e}")))
    }

    /// Read a generic item back as a typed record.
    pub fn into_record<T: DeserializeOwned>(self) -> CoreResult<T> {
        let context = format!("{} / {}", self.pk, self.sk);
        let value = serde_json::to_value(self)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize item: {e}")))?;
        serde_json::from_value(value)
            .map_err(|e| CoreError::MalformedItem(format!("Item {context}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_field_is_renamed_and_attributes_flattened() {
        let item: Item = serde_json::from_value(json!({
            "pk": "Dashboard#D1",
            "sk": "Widget#W1",
            "type": "Widget",
            "name": "n",
            "order": 2,
        }))
        .unwrap();

        assert_eq!(item.item_type, "Widget");
        assert_eq!(item.attributes["name"], "n");
        assert_eq!(item.attributes["order"], 2);
        assert!(!item.attributes.contains_key("type"));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "Widget");
        assert_eq!(back["name"], "n");
    }

    #[test]
    fn key_is_built_from_pk_and_sk() {
        let item = Item {
            pk: "a".into(),
            sk: "b".into(),
            item_type: "Widget".into(),
            attributes: Default::default(),
        };
        assert_eq!(item.key(), ItemKey::new("a", "b"));
    }

    #[test]
    fn from_record_requires_key_fields() {
        let err = Item::from_record(&json!({ "name": "no keys" })).unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));
    }
}
