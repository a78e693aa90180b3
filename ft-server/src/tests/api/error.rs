use crate::ApiError;

use ft_auth::AuthError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_not_found_when_into_response_then_404_with_code() {
    let error = ApiError::NotFound {
        message: "User u1 not found".to_string(),
        location: location(),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert!(json["error"]["message"].as_str().unwrap().contains("u1"));
}

#[tokio::test]
async fn given_unauthorized_when_into_response_then_401() {
    let error = ApiError::Unauthorized {
        message: "Invalid API key".to_string(),
        location: location(),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn given_rate_limited_when_into_response_then_429() {
    let error = ApiError::RateLimited {
        message: "Too many requests".to_string(),
        location: location(),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn given_missing_credential_when_converted_then_unauthorized() {
    let auth_error = AuthError::MissingCredential {
        location: location(),
    };

    let api_error = ApiError::from(auth_error);

    assert!(matches!(api_error, ApiError::Unauthorized { .. }));
}

#[test]
fn given_invalid_credential_when_converted_then_unauthorized() {
    let auth_error = AuthError::InvalidCredential {
        location: location(),
    };

    let api_error = ApiError::from(auth_error);

    assert!(matches!(api_error, ApiError::Unauthorized { .. }));
}

#[test]
fn given_store_error_when_converted_then_internal_without_path_details() {
    let store_error = ft_store::StoreError::Read {
        path: "/var/lib/flags/db.json".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        location: location(),
    };

    let api_error = ApiError::from(store_error);

    match api_error {
        ApiError::Internal { ref message, .. } => {
            assert!(!message.contains("db.json"), "paths must not leak to clients");
        }
        other => panic!("expected Internal, got {other:?}"),
    }
}

#[test]
fn given_rate_limit_exceeded_when_converted_then_rate_limited() {
    let auth_error = AuthError::RateLimitExceeded {
        limit: 120,
        window_secs: 60,
        location: location(),
    };

    let api_error = ApiError::from(auth_error);

    assert!(matches!(api_error, ApiError::RateLimited { .. }));
}
