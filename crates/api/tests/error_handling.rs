//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use perfdash_api::error::AppError;
use perfdash_core::CoreError;
use perfdash_db::DbError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Widget",
        id: "W1".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Widget with id W1 not found");
}

#[tokio::test]
async fn missing_field_returns_400_with_field_message() {
    let err = AppError::Core(CoreError::MissingField {
        widget: "Table",
        field: "datasetId",
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Table widget must have `content.datasetId` field");
}

#[tokio::test]
async fn invalid_widget_type_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::InvalidWidgetType("Image".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_WIDGET_TYPE");
    assert_eq!(json["error"], "Invalid widget type: Image");
}

#[tokio::test]
async fn malformed_key_is_sanitized_500() {
    let err = AppError::Core(CoreError::MalformedKey {
        expected: "Widget#",
        key: "Widgt#W1".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn core_error_wrapped_by_db_keeps_its_mapping() {
    let err = AppError::Db(DbError::Core(CoreError::Validation("bad".into())));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad");
}

#[tokio::test]
async fn db_row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Db(DbError::Sqlx(sqlx::Error::RowNotFound))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn encoding_failure_hides_message() {
    let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let (status, json) = error_to_response(AppError::Db(DbError::Encoding(cause))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
