//! Handlers for dashboard widgets.
//!
//! Widgets are addressed by `(dashboard_id, widget_id)`; content is
//! validated by the core widget factory before anything is stored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use perfdash_core::widget::{self, WidgetFactory, WidgetPosition};
use perfdash_core::CoreError;
use perfdash_db::repositories::WidgetRepo;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWidgetRequest {
    #[validate(length(min = 1, message = "Widget name must not be empty"))]
    pub name: String,
    pub widget_type: String,
    #[serde(default)]
    pub content: Value,
}

/// Replacement name and content. The widget type cannot change.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWidgetRequest {
    #[validate(length(min = 1, message = "Widget name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub content: Value,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetWidgetOrderRequest {
    #[validate(length(min = 1, message = "At least one widget position is required"))]
    pub widgets: Vec<WidgetPosition>,
}

fn widget_not_found(widget_id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Widget",
        id: widget_id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/{id}/widget
///
/// All widgets of a dashboard, ordered by position.
pub async fn list_widgets(
    State(state): State<AppState>,
    Path(dashboard_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let widgets = WidgetRepo::list_by_dashboard(state.store(), &dashboard_id).await?;

    Ok(Json(DataResponse { data: widgets }))
}

/// POST /api/v1/dashboard/{id}/widget
pub async fn create_widget(
    State(state): State<AppState>,
    Path(dashboard_id): Path<String>,
    Json(input): Json<CreateWidgetRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let widget = WidgetFactory::new().create_widget(
        &input.name,
        &dashboard_id,
        &input.widget_type,
        &input.content,
    )?;
    WidgetRepo::save(state.store(), &widget).await?;

    tracing::info!(
        %dashboard_id,
        widget_id = %widget.id,
        widget_type = %widget.widget_type(),
        "Widget created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: widget })))
}

/// GET /api/v1/dashboard/{id}/widget/{widget_id}
pub async fn get_widget(
    State(state): State<AppState>,
    Path((dashboard_id, widget_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let widget = WidgetRepo::find(state.store(), &dashboard_id, &widget_id)
        .await?
        .ok_or_else(|| widget_not_found(widget_id))?;

    Ok(Json(DataResponse { data: widget }))
}

/// PUT /api/v1/dashboard/{id}/widget/{widget_id}
///
/// Replace name and content. Content is re-validated against the widget's
/// existing type; id, dashboard and position are kept.
pub async fn update_widget(
    State(state): State<AppState>,
    Path((dashboard_id, widget_id)): Path<(String, String)>,
    Json(input): Json<UpdateWidgetRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let existing = WidgetRepo::find(state.store(), &dashboard_id, &widget_id)
        .await?
        .ok_or_else(|| widget_not_found(widget_id.clone()))?;

    let updated = widget::update_widget(&existing, &input.name, &input.content)?;
    WidgetRepo::save(state.store(), &updated).await?;

    tracing::info!(%dashboard_id, %widget_id, "Widget updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/dashboard/{id}/widget/{widget_id}
pub async fn delete_widget(
    State(state): State<AppState>,
    Path((dashboard_id, widget_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let deleted = WidgetRepo::delete(state.store(), &dashboard_id, &widget_id).await?;
    if !deleted {
        return Err(widget_not_found(widget_id));
    }

    tracing::info!(%dashboard_id, %widget_id, "Widget deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/dashboard/{id}/widgetorder
///
/// Body: `{ "widgets": [{ "id": "...", "order": 0 }, ...] }`. Returns the
/// dashboard's widgets in their new order.
pub async fn set_widget_order(
    State(state): State<AppState>,
    Path(dashboard_id): Path<String>,
    Json(input): Json<SetWidgetOrderRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let widgets = WidgetRepo::set_order(state.store(), &dashboard_id, &input.widgets).await?;

    Ok(Json(DataResponse { data: widgets }))
}
