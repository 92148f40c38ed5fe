//! Widget routes, nested under `/dashboard`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::widget;
use crate::state::AppState;

/// ```text
/// GET    /{id}/widget                   -> list_widgets
/// POST   /{id}/widget                   -> create_widget
/// GET    /{id}/widget/{widget_id}       -> get_widget
/// PUT    /{id}/widget/{widget_id}       -> update_widget
/// DELETE /{id}/widget/{widget_id}       -> delete_widget
/// PUT    /{id}/widgetorder              -> set_widget_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/widget",
            get(widget::list_widgets).post(widget::create_widget),
        )
        .route(
            "/{id}/widget/{widget_id}",
            get(widget::get_widget)
                .put(widget::update_widget)
                .delete(widget::delete_widget),
        )
        .route("/{id}/widgetorder", put(widget::set_widget_order))
}
