use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dataset;
use crate::state::AppState;

/// Dataset routes mounted at `/dataset`.
///
/// ```text
/// POST   /          -> create_dataset
/// GET    /{id}      -> get_dataset
/// DELETE /{id}      -> delete_dataset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(dataset::create_dataset))
        .route(
            "/{id}",
            get(dataset::get_dataset).delete(dataset::delete_dataset),
        )
}
