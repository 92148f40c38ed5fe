//! Dashboard widgets.
//!
//! A widget is one of three variants (text, chart, table). The variant is
//! carried by [`WidgetContent`], so the type tag can never disagree with
//! the payload. Construction and validation live in [`factory`]; the item
//! mapping lives in [`mapping`].

pub mod factory;
pub mod mapping;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{self, EntityId, Timestamp};

pub use factory::{
    create_chart_widget, create_table_widget, create_text_widget, create_widget_with_id,
    update_widget, WidgetFactory,
};
pub use mapping::{from_item, from_items, to_item, WidgetItem};

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetType {
    Text,
    Chart,
    Table,
}

impl WidgetType {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetType::Text => "Text",
            WidgetType::Chart => "Chart",
            WidgetType::Table => "Table",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Text" => Ok(WidgetType::Text),
            "Chart" => Ok(WidgetType::Chart),
            "Table" => Ok(WidgetType::Table),
            other => Err(CoreError::InvalidWidgetType(other.to_string())),
        }
    }
}

/// Recognized chart renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    LineChart,
    BarChart,
    ColumnChart,
    PartWholeChart,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::LineChart,
        ChartType::BarChart,
        ChartType::ColumnChart,
        ChartType::PartWholeChart,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::LineChart => "LineChart",
            ChartType::BarChart => "BarChart",
            ChartType::ColumnChart => "ColumnChart",
            ChartType::PartWholeChart => "PartWholeChart",
        }
    }

    /// Look up a chart type by its exact tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

/// How the dataset behind a chart or table was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetType {
    CreateNew,
    StaticDataset,
    DynamicDataset,
}

impl DatasetType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CreateNew" => Some(DatasetType::CreateNew),
            "StaticDataset" => Some(DatasetType::StaticDataset),
            "DynamicDataset" => Some(DatasetType::DynamicDataset),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Content payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartContent {
    pub title: String,
    pub chart_type: ChartType,
    pub dataset_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub s3_key: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<DatasetType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableContent {
    pub title: String,
    pub dataset_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub s3_key: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<DatasetType>,
}

/// Variant-specific payload; the enum case is the widget's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "widgetType", content = "content")]
pub enum WidgetContent {
    Text(TextContent),
    Chart(ChartContent),
    Table(TableContent),
}

impl WidgetContent {
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetContent::Text(_) => WidgetType::Text,
            WidgetContent::Chart(_) => WidgetType::Chart,
            WidgetContent::Table(_) => WidgetType::Table,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// A widget placed on a dashboard.
///
/// Serializes as `{ id, dashboardId, name, order, updatedAt, widgetType, content }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: EntityId,
    pub dashboard_id: EntityId,
    pub name: String,
    pub order: i32,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub content: WidgetContent,
}

impl Widget {
    pub fn widget_type(&self) -> WidgetType {
        self.content.widget_type()
    }

    /// Copy of this widget moved to position `order`.
    pub fn with_order(&self, order: i32) -> Widget {
        Widget {
            order,
            updated_at: Some(types::now()),
            ..self.clone()
        }
    }
}

/// Target position of one widget in a reorder request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub id: EntityId,
    pub order: i32,
}
