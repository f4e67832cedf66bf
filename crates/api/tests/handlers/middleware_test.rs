use axum::body::to_bytes;
use axum::http::StatusCode;
use mealslot_api::middleware::error_handling::{map_error, AppError};
use mealslot_core::errors::{FieldErrors, SlotError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case(SlotError::NotFound("Slot not found".to_string()), StatusCode::NOT_FOUND)]
#[case(SlotError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(SlotError::InvalidFields(FieldErrors::new()), StatusCode::BAD_REQUEST)]
#[case(SlotError::Internal(eyre::eyre!("boom")), StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: SlotError, #[case] status: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), status);
}

#[tokio::test]
async fn test_invalid_fields_body() {
    let mut fields = FieldErrors::new();
    fields.add("address", "Address is required");

    let response = map_error(SlotError::InvalidFields(fields));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "Validation error: invalid fields: address");
    assert_eq!(body["fields"]["address"], "Address is required");
}

#[tokio::test]
async fn test_plain_error_body_has_no_fields() {
    let response = map_error(SlotError::NotFound("Slot not found".to_string()));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "Resource not found: Slot not found");
    assert!(body.get("fields").is_none());
}

#[test]
fn test_eyre_report_becomes_internal() {
    let error: AppError = eyre::eyre!("clock failure").into();
    assert!(matches!(error.0, SlotError::Internal(_)));
}
