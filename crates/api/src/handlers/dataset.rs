//! Handlers for datasets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use perfdash_core::dataset::{DatasetFactory, DatasetInfo};
use perfdash_core::CoreError;
use perfdash_db::repositories::DatasetRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn dataset_not_found(dataset_id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Dataset",
        id: dataset_id,
    })
}

/// POST /api/v1/dataset
///
/// Registers metadata of an already uploaded file.
pub async fn create_dataset(
    State(state): State<AppState>,
    Json(input): Json<DatasetInfo>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let dataset = DatasetFactory::new().create_new(input)?;
    DatasetRepo::save(state.store(), &dataset).await?;

    tracing::info!(
        dataset_id = %dataset.id,
        file_name = %dataset.file_name,
        source_type = ?dataset.source_type,
        "Dataset registered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: dataset })))
}

/// GET /api/v1/dataset/{id}
pub async fn get_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dataset = DatasetRepo::find(state.store(), &dataset_id)
        .await?
        .ok_or_else(|| dataset_not_found(dataset_id))?;

    Ok(Json(DataResponse { data: dataset }))
}

/// DELETE /api/v1/dataset/{id}
///
/// Widgets referencing the dataset are not touched.
pub async fn delete_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !DatasetRepo::delete(state.store(), &dataset_id).await? {
        return Err(dataset_not_found(dataset_id));
    }

    tracing::info!(%dataset_id, "Dataset deleted");

    Ok(StatusCode::NO_CONTENT)
}
