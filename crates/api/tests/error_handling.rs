//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use favorites_api::error::AppError;
use favorites_core::error::CoreError;
use favorites_core::types::new_id;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_variants_return_404_with_distinct_codes() {
    let user_id = new_id();
    let asset_id = new_id();
    let cases = [
        (CoreError::UserNotFound(user_id), "USER_NOT_FOUND"),
        (CoreError::AssetNotFound(asset_id), "ASSET_NOT_FOUND"),
        (
            CoreError::NotInFavorites { user_id, asset_id },
            "NOT_IN_FAVORITES",
        ),
    ];

    for (err, code) in cases {
        let (status, json) = error_to_response(AppError::Core(err)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], code);
    }
}

#[tokio::test]
async fn already_favorited_returns_409() {
    let user_id = new_id();
    let asset_id = new_id();
    let err = AppError::Core(CoreError::AlreadyFavorited { user_id, asset_id });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "ALREADY_FAVORITED");
    assert!(json["error"].as_str().unwrap().contains(&asset_id.to_string()));
}

#[tokio::test]
async fn invalid_kind_returns_400() {
    let err = AppError::Core(CoreError::InvalidKind("video".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_KIND");
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation("data is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "data is required");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("connection refused at 10.0.0.3".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
