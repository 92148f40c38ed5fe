//! Widget construction and per-variant content validation.
//!
//! Incoming content is untyped JSON. Each variant constructor checks its
//! required fields in a fixed order and stops at the first violation, so
//! callers always see the same error for the same payload.

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::ids::{self, IdSource, UuidIdSource};
use crate::types::{self, EntityId};
use crate::validation::{optional_str, required_str};

use super::{
    ChartContent, ChartType, DatasetType, TableContent, TextContent, Widget, WidgetContent,
    WidgetType,
};

/// Builds widgets with identifiers drawn from `I`.
#[derive(Debug, Clone, Default)]
pub struct WidgetFactory<I = UuidIdSource> {
    ids: I,
}

impl WidgetFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource> WidgetFactory<I> {
    pub fn with_ids(ids: I) -> Self {
        Self { ids }
    }

    /// Create a widget of the variant named by `widget_type` under a fresh id.
    ///
    /// Fails with [`CoreError::InvalidWidgetType`] for any tag other than
    /// `Text`, `Chart` or `Table`.
    pub fn create_widget(
        &self,
        name: &str,
        dashboard_id: &str,
        widget_type: &str,
        content: &Value,
    ) -> CoreResult<Widget> {
        create_widget_with_id(ids::fresh_id(&self.ids)?, name, dashboard_id, widget_type, content)
    }

    /// Clone `widget` into `dashboard_id` under a fresh id.
    ///
    /// Name, order and content are copied as-is without re-validation;
    /// the source widget already passed validation when it was created.
    pub fn create_from_widget(&self, dashboard_id: &str, widget: &Widget) -> CoreResult<Widget> {
        let id = ids::fresh_id(&self.ids)?;
        check_keys(&id, dashboard_id)?;
        Ok(Widget {
            id,
            dashboard_id: dashboard_id.to_string(),
            name: widget.name.clone(),
            order: widget.order,
            updated_at: Some(types::now()),
            content: widget.content.clone(),
        })
    }
}

/// Create a widget with a caller-chosen id.
pub fn create_widget_with_id(
    id: EntityId,
    name: &str,
    dashboard_id: &str,
    widget_type: &str,
    content: &Value,
) -> CoreResult<Widget> {
    match widget_type.parse::<WidgetType>()? {
        WidgetType::Text => create_text_widget(id, name, dashboard_id, content),
        WidgetType::Chart => create_chart_widget(id, name, dashboard_id, content),
        WidgetType::Table => create_table_widget(id, name, dashboard_id, content),
    }
}

pub fn create_text_widget(
    id: EntityId,
    name: &str,
    dashboard_id: &str,
    content: &Value,
) -> CoreResult<Widget> {
    check_keys(&id, dashboard_id)?;
    let content = text_content(content)?;
    Ok(new_widget(id, name, dashboard_id, WidgetContent::Text(content)))
}

pub fn create_chart_widget(
    id: EntityId,
    name: &str,
    dashboard_id: &str,
    content: &Value,
) -> CoreResult<Widget> {
    check_keys(&id, dashboard_id)?;
    let content = chart_content(content)?;
    Ok(new_widget(id, name, dashboard_id, WidgetContent::Chart(content)))
}

pub fn create_table_widget(
    id: EntityId,
    name: &str,
    dashboard_id: &str,
    content: &Value,
) -> CoreResult<Widget> {
    check_keys(&id, dashboard_id)?;
    let content = table_content(content)?;
    Ok(new_widget(id, name, dashboard_id, WidgetContent::Table(content)))
}

/// Replace a widget's name and content.
///
/// The new content is validated against the widget's existing variant;
/// id, dashboard and order are kept and `updated_at` is refreshed.
pub fn update_widget(widget: &Widget, name: &str, content: &Value) -> CoreResult<Widget> {
    let content = match widget.widget_type() {
        WidgetType::Text => WidgetContent::Text(text_content(content)?),
        WidgetType::Chart => WidgetContent::Chart(chart_content(content)?),
        WidgetType::Table => WidgetContent::Table(table_content(content)?),
    };

    Ok(Widget {
        id: widget.id.clone(),
        dashboard_id: widget.dashboard_id.clone(),
        name: name.to_string(),
        order: widget.order,
        updated_at: Some(types::now()),
        content,
    })
}

/// Both ids end up in the widget's key and must be non-empty to be
/// recoverable from it.
fn check_keys(id: &str, dashboard_id: &str) -> CoreResult<()> {
    if id.is_empty() {
        return Err(CoreError::Validation("Widget id must not be empty".into()));
    }
    if dashboard_id.is_empty() {
        return Err(CoreError::Validation("dashboardId must not be empty".into()));
    }
    Ok(())
}

/// New widgets always start at position 0.
fn new_widget(id: EntityId, name: &str, dashboard_id: &str, content: WidgetContent) -> Widget {
    Widget {
        id,
        dashboard_id: dashboard_id.to_string(),
        name: name.to_string(),
        order: 0,
        updated_at: Some(types::now()),
        content,
    }
}

// ---------------------------------------------------------------------------
// Content validation
// ---------------------------------------------------------------------------

fn text_content(content: &Value) -> CoreResult<TextContent> {
    let text = required_str(content, "Text", "text")?;
    Ok(TextContent { text })
}

/// Order: title, chartType, chartType membership, datasetId, s3Key,
/// fileName, then the optional summary and datasetType.
fn chart_content(content: &Value) -> CoreResult<ChartContent> {
    let title = required_str(content, "Chart", "title")?;
    let chart_type = required_str(content, "Chart", "chartType")?;
    let chart_type = ChartType::from_tag(&chart_type).ok_or_else(|| {
        CoreError::Validation(format!("Invalid chart type '{chart_type}'"))
    })?;
    let dataset_id = required_str(content, "Chart", "datasetId")?;
    let s3_key = required_str(content, "Chart", "s3Key")?;
    let file_name = required_str(content, "Chart", "fileName")?;
    let summary = optional_str(content, "summary")?;
    let dataset_type = dataset_type(content)?;

    Ok(ChartContent {
        title,
        chart_type,
        dataset_id,
        summary,
        s3_key,
        file_name,
        dataset_type,
    })
}

/// Order: title, datasetId, s3Key, fileName, then the optional summary
/// and datasetType.
fn table_content(content: &Value) -> CoreResult<TableContent> {
    let title = required_str(content, "Table", "title")?;
    let dataset_id = required_str(content, "Table", "datasetId")?;
    let s3_key = required_str(content, "Table", "s3Key")?;
    let file_name = required_str(content, "Table", "fileName")?;
    let summary = optional_str(content, "summary")?;
    let dataset_type = dataset_type(content)?;

    Ok(TableContent {
        title,
        dataset_id,
        summary,
        s3_key,
        file_name,
        dataset_type,
    })
}

fn dataset_type(content: &Value) -> CoreResult<Option<DatasetType>> {
    match optional_str(content, "datasetType")? {
        None => Ok(None),
        Some(tag) => DatasetType::from_tag(&tag)
            .map(Some)
            .ok_or_else(|| CoreError::Validation(format!("Invalid dataset type '{tag}'"))),
    }
}
