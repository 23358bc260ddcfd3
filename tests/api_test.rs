//! Integration tests for the API surface.
//!
//! These tests exercise error-to-status mapping, request validation,
//! and response shaping without requiring a database connection.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use gas_platform_api::api::handlers::user_handler::CreateUserRequest;
use gas_platform_api::domain::{User, UserResponse};
use gas_platform_api::errors::AppError;

// =============================================================================
// Error Status Mapping
// =============================================================================

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_conflict_maps_to_409() {
    let response = AppError::conflict("email").into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_validation_maps_to_422() {
    let response = AppError::validation("missing field").into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_internal_maps_to_500() {
    let response = AppError::internal("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Request Validation
// =============================================================================

fn valid_request() -> CreateUserRequest {
    serde_json::from_value(json!({
        "email": "user@example.com",
        "username": "johndoe",
        "password": "SecurePass123"
    }))
    .unwrap()
}

#[test]
fn test_valid_create_request_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_invalid_email_rejected() {
    let req: CreateUserRequest = serde_json::from_value(json!({
        "email": "not-an-email",
        "username": "johndoe",
        "password": "SecurePass123"
    }))
    .unwrap();

    assert!(req.validate().is_err());
}

#[test]
fn test_short_username_rejected() {
    let req: CreateUserRequest = serde_json::from_value(json!({
        "email": "user@example.com",
        "username": "ab",
        "password": "SecurePass123"
    }))
    .unwrap();

    assert!(req.validate().is_err());
}

#[test]
fn test_short_password_rejected() {
    let req: CreateUserRequest = serde_json::from_value(json!({
        "email": "user@example.com",
        "username": "johndoe",
        "password": "short"
    }))
    .unwrap();

    assert!(req.validate().is_err());
}

#[test]
fn test_missing_field_fails_decode() {
    let result: Result<CreateUserRequest, _> = serde_json::from_value(json!({
        "email": "user@example.com",
        "username": "johndoe"
    }));

    assert!(result.is_err());
}

#[test]
fn test_unknown_field_fails_decode() {
    // Decode is fail-closed: unrecognized fields are an error, not
    // silently dropped
    let result: Result<CreateUserRequest, _> = serde_json::from_value(json!({
        "email": "user@example.com",
        "username": "johndoe",
        "password": "SecurePass123",
        "is_superuser": true
    }));

    assert!(result.is_err());
}

// =============================================================================
// Response Shaping
// =============================================================================

#[test]
fn test_user_response_omits_password_hash() {
    let user = User::new(
        Uuid::new_v4(),
        "user@example.com".to_string(),
        "johndoe".to_string(),
        "$argon2id$fakehash".to_string(),
    );

    let response = UserResponse::from(user);
    let body = serde_json::to_value(&response).unwrap();

    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
    assert_eq!(body["email"], "user@example.com");
    assert_eq!(body["username"], "johndoe");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["is_superuser"], false);
}

#[test]
fn test_domain_user_never_serializes_hash() {
    let user = User::new(
        Uuid::new_v4(),
        "user@example.com".to_string(),
        "johndoe".to_string(),
        "$argon2id$fakehash".to_string(),
    );

    let body = serde_json::to_value(&user).unwrap();
    assert!(body.get("password_hash").is_none());
}

#[test]
fn test_new_accounts_are_active_non_superuser() {
    let user = User::new(
        Uuid::new_v4(),
        "user@example.com".to_string(),
        "johndoe".to_string(),
        "hash".to_string(),
    );

    assert!(user.is_active);
    assert!(!user.is_superuser);
    assert_eq!(user.created_at, user.updated_at);
}
