//! Typed error handling for the classroom API
//!
//! Every failure that can reach a client is expressed as an [`ApiError`],
//! which knows its HTTP status, a stable machine-readable code and how to
//! render itself as a JSON body.
//!
//! # Error Categories
//!
//! - [`EntityError`]: Errors related to entity records and their serialization
//! - [`RequestError`]: Errors related to the inbound request (auth, routing, headers)
//! - [`StorageError`]: Errors raised by a data-access backend
//!
//! # Example
//!
//! ```rust,ignore
//! use classroom::prelude::*;
//!
//! match result {
//!     Err(ApiError::Request(RequestError::Forbidden { message })) => {
//!         eprintln!("denied: {}", message);
//!     }
//!     Err(e) => eprintln!("{} ({})", e, e.status_code()),
//!     Ok(_) => {}
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the classroom API
#[derive(Debug)]
pub enum ApiError {
    /// Entity-related errors
    Entity(EntityError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Storage backend errors
    Storage(StorageError),

    /// Anything that does not fit another category
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Entity(e) => write!(f, "{}", e),
            ApiError::Request(e) => write!(f, "{}", e),
            ApiError::Storage(e) => write!(f, "{}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Entity(e) => Some(e),
            ApiError::Request(e) => Some(e),
            ApiError::Storage(e) => Some(e),
            ApiError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Entity(e) => e.status_code(),
            ApiError::Request(e) => e.status_code(),
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Entity(e) => e.error_code(),
            ApiError::Request(e) => e.error_code(),
            ApiError::Storage(_) => "STORAGE_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Entity(EntityError::AlreadyExists { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id
                }))
            }
            ApiError::Request(RequestError::RouteNotFound { method, path }) => {
                Some(serde_json::json!({
                    "method": method,
                    "path": path
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity records
#[derive(Debug)]
pub enum EntityError {
    /// A record with the same id is already stored
    AlreadyExists { entity_type: String, id: i64 },

    /// Failed to serialize a record or its projection
    SerializationError {
        entity_type: String,
        message: String,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::AlreadyExists { entity_type, id } => {
                write!(f, "{} with id '{}' already exists", entity_type, id)
            }
            EntityError::SerializationError {
                entity_type,
                message,
            } => write!(f, "Failed to serialize {}: {}", entity_type, message),
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::AlreadyExists { .. } => StatusCode::CONFLICT,
            EntityError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
            EntityError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<EntityError> for ApiError {
    fn from(err: EntityError) -> Self {
        ApiError::Entity(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// A header was present but could not be understood
    InvalidHeader { header: String, message: String },

    /// No usable credential
    Unauthorized { message: String },

    /// Credential resolved but lacks the required role
    Forbidden { message: String },

    /// No route matched the request
    RouteNotFound { method: String, path: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidHeader { header, message } => {
                write!(f, "Invalid header '{}': {}", header, message)
            }
            RequestError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            RequestError::Forbidden { message } => write!(f, "Forbidden: {}", message),
            RequestError::RouteNotFound { method, path } => {
                write!(f, "No such api: {} {}", method, path)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidHeader { .. } => StatusCode::BAD_REQUEST,
            RequestError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            RequestError::Forbidden { .. } => StatusCode::FORBIDDEN,
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidHeader { .. } => "INVALID_HEADER",
            RequestError::Unauthorized { .. } => "UNAUTHORIZED",
            RequestError::Forbidden { .. } => "FORBIDDEN",
            RequestError::RouteNotFound { .. } => "NOT_FOUND",
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::Request(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Query execution error
    QueryError { backend: String, message: String },

    /// Backend not available
    Unavailable { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Entity(EntityError::SerializationError {
            entity_type: "unknown".to_string(),
            message: err.to_string(),
        })
    }
}

/// Collaborator traits return `anyhow::Result`; recover the typed error
/// when one was boxed, otherwise fall back to [`ApiError::Internal`].
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ApiError>() {
            Ok(api_err) => return api_err,
            Err(err) => err,
        };
        let err = match err.downcast::<StorageError>() {
            Ok(storage_err) => return ApiError::Storage(storage_err),
            Err(err) => err,
        };
        let err = match err.downcast::<EntityError>() {
            Ok(entity_err) => return ApiError::Entity(entity_err),
            Err(err) => err,
        };
        ApiError::Internal(format!("{:#}", err))
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for classroom API operations
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_display() {
        let err = EntityError::AlreadyExists {
            entity_type: "teacher".to_string(),
            id: 7,
        };
        assert_eq!(err.to_string(), "teacher with id '7' already exists");
    }

    #[test]
    fn test_request_error_status_codes() {
        assert_eq!(
            RequestError::InvalidHeader {
                header: "X-Principal".into(),
                message: "bad".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RequestError::Unauthorized {
                message: "principal not found".into()
            }
            .status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            RequestError::Forbidden {
                message: "requester should be a principal".into()
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            RequestError::RouteNotFound {
                method: "GET".into(),
                path: "/nope".into()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_storage_error() {
        let err = ApiError::Storage(StorageError::Unavailable {
            backend: "in-memory".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert!(err.to_string().contains("in-memory"));
    }

    #[test]
    fn test_error_response_serialization() {
        let err = ApiError::Request(RequestError::RouteNotFound {
            method: "GET".to_string(),
            path: "/principal/teachers/".to_string(),
        });
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["details"]["path"], "/principal/teachers/");
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let err = ApiError::Internal("boom".to_string());
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert!(body.get("details").is_none());
        assert_eq!(body["message"], "Internal error: boom");
    }

    #[test]
    fn test_from_anyhow_recovers_storage_error() {
        let err: anyhow::Error = StorageError::QueryError {
            backend: "postgres".to_string(),
            message: "timeout".to_string(),
        }
        .into();
        let api_err = ApiError::from(err);
        assert!(matches!(api_err, ApiError::Storage(StorageError::QueryError { .. })));
    }

    #[test]
    fn test_from_anyhow_recovers_entity_error() {
        let err: anyhow::Error = EntityError::AlreadyExists {
            entity_type: "teacher".to_string(),
            id: 1,
        }
        .into();
        let api_err = ApiError::from(err);
        assert_eq!(api_err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_from_anyhow_untyped_becomes_internal() {
        let api_err = ApiError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(api_err.error_code(), "INTERNAL_ERROR");
        assert!(api_err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let api_err = ApiError::from(json_err);
        assert_eq!(api_err.error_code(), "SERIALIZATION_ERROR");
    }
}
