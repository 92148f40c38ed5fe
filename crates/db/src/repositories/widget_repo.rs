//! Repository for widget items.
//!
//! Widgets live under their dashboard's partition key, so listing a
//! dashboard's widgets is a single partition query.

use std::collections::HashMap;

use perfdash_core::item::WIDGET_ITEM_TYPE;
use perfdash_core::widget::{self, Widget, WidgetItem, WidgetPosition};
use perfdash_core::{keys, CoreError, IdSource, Item};

use crate::{DbResult, ItemStore};

pub struct WidgetRepo;

impl WidgetRepo {
    /// All widgets of a dashboard, sorted by `order`.
    ///
    /// Widgets sharing an `order` value keep sort-key order. Non-widget
    /// items in the partition are skipped.
    pub async fn list_by_dashboard(
        store: &dyn ItemStore,
        dashboard_id: &str,
    ) -> DbResult<Vec<Widget>> {
        let items = store.query(&keys::widget_partition_key(dashboard_id)).await?;

        let records = items
            .into_iter()
            .filter(|item| item.item_type == WIDGET_ITEM_TYPE)
            .map(Item::into_record::<WidgetItem>)
            .collect::<Result<Vec<_>, _>>()?;

        let mut widgets = widget::from_items(records)?;
        widgets.sort_by_key(|w| w.order);
        Ok(widgets)
    }

    pub async fn find(
        store: &dyn ItemStore,
        dashboard_id: &str,
        widget_id: &str,
    ) -> DbResult<Option<Widget>> {
        let key = keys::widget_key(dashboard_id, widget_id);
        let Some(item) = store.get(&key).await? else {
            return Ok(None);
        };
        Ok(Some(widget::from_item(item.into_record()?)?))
    }

    /// Insert or replace a widget.
    pub async fn save(store: &dyn ItemStore, widget: &Widget) -> DbResult<()> {
        let item = Item::from_record(&widget::to_item(widget)?)?;
        store.put(item).await?;
        tracing::debug!(
            dashboard_id = %widget.dashboard_id,
            widget_id = %widget.id,
            "Widget saved"
        );
        Ok(())
    }

    pub async fn delete(store: &dyn ItemStore, dashboard_id: &str, widget_id: &str) -> DbResult<bool> {
        store.delete(&keys::widget_key(dashboard_id, widget_id)).await
    }

    /// Apply new positions to a dashboard's widgets.
    ///
    /// Every listed widget must exist; nothing is written otherwise.
    /// Widgets not listed keep their position. Returns the full,
    /// re-sorted widget list.
    pub async fn set_order(
        store: &dyn ItemStore,
        dashboard_id: &str,
        positions: &[WidgetPosition],
    ) -> DbResult<Vec<Widget>> {
        let mut widgets = Self::list_by_dashboard(store, dashboard_id).await?;
        let index: HashMap<&str, usize> = widgets
            .iter()
            .enumerate()
            .map(|(i, w)| (w.id.as_str(), i))
            .collect();

        let mut moves = Vec::with_capacity(positions.len());
        for position in positions {
            let Some(&i) = index.get(position.id.as_str()) else {
                return Err(CoreError::NotFound {
                    entity: "Widget",
                    id: position.id.clone(),
                }
                .into());
            };
            moves.push((i, position.order));
        }

        for (i, order) in moves {
            if widgets[i].order == order {
                continue;
            }
            widgets[i] = widgets[i].with_order(order);
            Self::save(store, &widgets[i]).await?;
        }

        widgets.sort_by_key(|w| w.order);
        tracing::info!(%dashboard_id, moved = positions.len(), "Widget order updated");
        Ok(widgets)
    }

    /// Clone every widget of `from_dashboard` into `to_dashboard` under
    /// fresh ids. Order values are copied verbatim.
    pub async fn copy_to_dashboard<I: IdSource + Sync>(
        store: &dyn ItemStore,
        factory: &widget::WidgetFactory<I>,
        from_dashboard: &str,
        to_dashboard: &str,
    ) -> DbResult<Vec<Widget>> {
        let sources = Self::list_by_dashboard(store, from_dashboard).await?;
        let mut copies = Vec::with_capacity(sources.len());
        for source in &sources {
            let copy = factory.create_from_widget(to_dashboard, source)?;
            Self::save(store, &copy).await?;
            copies.push(copy);
        }
        tracing::info!(
            %from_dashboard,
            %to_dashboard,
            count = copies.len(),
            "Widgets copied to dashboard"
        );
        Ok(copies)
    }
}
