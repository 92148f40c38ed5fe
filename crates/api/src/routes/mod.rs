pub mod dataset;
pub mod health;
pub mod widget;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /dashboard/{id}/widget                    list, create
/// /dashboard/{id}/widget/{widget_id}        get, update, delete
/// /dashboard/{id}/widgetorder               reorder (PUT)
///
/// /dataset                                  register (POST)
/// /dataset/{id}                             get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dashboard", widget::router())
        .nest("/dataset", dataset::router())
}
