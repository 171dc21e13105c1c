//! Uniform success envelope for API responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Success envelope: every successful response body is `{"data": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the envelope
    pub fn respond(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::respond(vec![1, 2, 3])).unwrap();
        assert_eq!(body, json!({ "data": [1, 2, 3] }));
    }

    #[test]
    fn test_into_response_is_ok() {
        let response = ApiResponse::respond(json!([])).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
