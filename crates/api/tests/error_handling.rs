//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use signup_api::error::AppError;
use signup_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn activity_not_found_returns_404() {
    let err = AppError::Core(CoreError::activity_not_found("NoSuchClub"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["detail"], "Activity not found: NoSuchClub");
}

#[tokio::test]
async fn participant_not_found_returns_404() {
    let err = AppError::Core(CoreError::participant_not_found("a@x.edu"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Participant not found: a@x.edu");
}

#[tokio::test]
async fn conflict_returns_400_with_already_signed_up_detail() {
    let err = AppError::Core(CoreError::Conflict {
        activity: "Chess Club".into(),
        email: "a@x.edu".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["detail"], "a@x.edu is already signed up for Chess Club");
}

#[tokio::test]
async fn capacity_reached_returns_400() {
    let err = AppError::Core(CoreError::CapacityReached {
        activity: "Math Club".into(),
        max_participants: 10,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CAPACITY_REACHED");
    assert_eq!(json["detail"], "Math Club is full (10 participants)");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["detail"], "invalid field value");
}
