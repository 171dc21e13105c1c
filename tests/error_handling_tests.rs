//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly

use axum::http::StatusCode;
use axum::response::IntoResponse;
use classroom::prelude::*;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_entity_already_exists_returns_409() {
        let err = ApiError::Entity(EntityError::AlreadyExists {
            entity_type: "teacher".to_string(),
            id: 1,
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_serialization_error_returns_500() {
        let err = ApiError::Entity(EntityError::SerializationError {
            entity_type: "teacher".to_string(),
            message: "missing field".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_request_unauthorized_returns_401() {
        let err = ApiError::Request(RequestError::Unauthorized {
            message: "principal not found".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_request_forbidden_returns_403() {
        let err = ApiError::Request(RequestError::Forbidden {
            message: "requester should be a principal".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_storage_error_returns_500() {
        let err = ApiError::Storage(StorageError::QueryError {
            backend: "in-memory".to_string(),
            message: "poisoned".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_returns_500() {
        let err = ApiError::Internal("unexpected".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_entity_error_codes() {
        assert_eq!(
            EntityError::AlreadyExists {
                entity_type: "teacher".to_string(),
                id: 1
            }
            .error_code(),
            "ENTITY_ALREADY_EXISTS"
        );

        assert_eq!(
            EntityError::SerializationError {
                entity_type: "teacher".to_string(),
                message: "x".to_string()
            }
            .error_code(),
            "SERIALIZATION_ERROR"
        );
    }

    #[test]
    fn test_request_error_codes() {
        assert_eq!(
            RequestError::Unauthorized {
                message: "test".to_string()
            }
            .error_code(),
            "UNAUTHORIZED"
        );

        assert_eq!(
            RequestError::Forbidden {
                message: "test".to_string()
            }
            .error_code(),
            "FORBIDDEN"
        );

        assert_eq!(
            RequestError::InvalidHeader {
                header: "X-Principal".to_string(),
                message: "test".to_string()
            }
            .error_code(),
            "INVALID_HEADER"
        );
    }
}

// =============================================================================
// Error Response Format Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_error_response_has_code_and_message() {
        let err = ApiError::Request(RequestError::Forbidden {
            message: "requester should be a principal".to_string(),
        });

        let response = err.to_response();

        assert_eq!(response.code, "FORBIDDEN");
        assert_eq!(response.message, "Forbidden: requester should be a principal");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_includes_details_for_conflict() {
        let err = ApiError::Entity(EntityError::AlreadyExists {
            entity_type: "teacher".to_string(),
            id: 42,
        });

        let details = err.to_response().details.expect("details");
        assert_eq!(details["entity_type"], "teacher");
        assert_eq!(details["id"], 42);
    }

    #[tokio::test]
    async fn test_into_response_sets_status_and_json_body() {
        let err = ApiError::Request(RequestError::Unauthorized {
            message: "principal not found".to_string(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["code"], "UNAUTHORIZED");
        assert_eq!(body["message"], "Unauthorized: principal not found");
    }
}

// =============================================================================
// Error Conversion Tests
// =============================================================================

mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_request_error_converts_to_api_error() {
        let api_err: ApiError = RequestError::Forbidden {
            message: "x".to_string(),
        }
        .into();

        assert!(matches!(
            api_err,
            ApiError::Request(RequestError::Forbidden { .. })
        ));
    }

    #[test]
    fn test_anyhow_wrapping_api_error_round_trips() {
        let source_err: anyhow::Error = ApiError::Request(RequestError::Unauthorized {
            message: "x".to_string(),
        })
        .into();

        let api_err = ApiError::from(source_err);
        assert_eq!(api_err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_anyhow_storage_error_keeps_category() {
        let source_err: anyhow::Error = StorageError::Unavailable {
            backend: "postgres".to_string(),
        }
        .into();

        let api_err = ApiError::from(source_err);
        assert_eq!(api_err.error_code(), "STORAGE_ERROR");
    }
}
