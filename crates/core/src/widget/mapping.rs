//! Widget ↔ item mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::item::WIDGET_ITEM_TYPE;
use crate::keys;
use crate::types;

use super::{Widget, WidgetContent, WidgetType};

/// Persisted form of a [`Widget`].
///
/// `content` is kept untyped here; it is narrowed by `widget_type` when the
/// item is read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetItem {
    pub pk: String,
    pub sk: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub name: String,
    pub widget_type: String,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub content: Value,
}

/// Rebuild a widget from its stored item.
///
/// Persisted content is trusted and not re-validated; it only has to have
/// the shape of the variant named by `widgetType`.
///
/// The only missing-attribute default is `updatedAt`, which becomes the
/// current time. Every other attribute, `order` included, is required.
pub fn from_item(item: WidgetItem) -> CoreResult<Widget> {
    if item.item_type != WIDGET_ITEM_TYPE {
        return Err(CoreError::MalformedItem(format!(
            "Expected item type '{WIDGET_ITEM_TYPE}', got '{}'",
            item.item_type
        )));
    }

    let id = keys::extract_widget_id(&item.sk)?.to_string();
    let dashboard_id = keys::extract_dashboard_id(&item.pk)?.to_string();
    let updated_at = types::parse_or_now(item.updated_at.as_deref())?;

    let widget_type = item.widget_type.parse::<WidgetType>().map_err(|_| {
        CoreError::MalformedItem(format!(
            "Widget {id} has unknown widget type '{}'",
            item.widget_type
        ))
    })?;
    let content = narrow_content(widget_type, item.content)
        .map_err(|e| CoreError::MalformedItem(format!("Widget {id} content: {e}")))?;

    Ok(Widget {
        id,
        dashboard_id,
        name: item.name,
        order: item.order,
        updated_at: Some(updated_at),
        content,
    })
}

/// Element-wise [`from_item`], preserving order. Fails on the first bad item.
pub fn from_items(items: Vec<WidgetItem>) -> CoreResult<Vec<Widget>> {
    items.into_iter().map(from_item).collect()
}

pub fn to_item(widget: &Widget) -> CoreResult<WidgetItem> {
    let key = keys::widget_key(&widget.dashboard_id, &widget.id);

    Ok(WidgetItem {
        pk: key.pk,
        sk: key.sk,
        item_type: WIDGET_ITEM_TYPE.to_string(),
        name: widget.name.clone(),
        widget_type: widget.widget_type().as_str().to_string(),
        order: widget.order,
        updated_at: widget.updated_at.as_ref().map(types::to_iso_string),
        content: content_value(&widget.content)?,
    })
}

fn narrow_content(widget_type: WidgetType, content: Value) -> serde_json::Result<WidgetContent> {
    Ok(match widget_type {
        WidgetType::Text => WidgetContent::Text(serde_json::from_value(content)?),
        WidgetType::Chart => WidgetContent::Chart(serde_json::from_value(content)?),
        WidgetType::Table => WidgetContent::Table(serde_json::from_value(content)?),
    })
}

fn content_value(content: &WidgetContent) -> CoreResult<Value> {
    let value = match content {
        WidgetContent::Text(c) => serde_json::to_value(c),
        WidgetContent::Chart(c) => serde_json::to_value(c),
        WidgetContent::Table(c) => serde_json::to_value(c),
    };
    value.map_err(|e| CoreError::Internal(format!("Failed to serialize widget content: {e}")))
}
