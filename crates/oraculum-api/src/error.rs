//! Error responses for oraculum-api.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// An error the API reports to the client.
///
/// Both variants are expected, recoverable conditions; the server has no
/// fatal request-handling paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The addressed resource does not exist.
    NotFound {
        /// Resource kind ("principle", "workflow").
        resource: &'static str,
        /// The key that failed to resolve.
        key: String,
    },
    /// The request carried an unusable parameter value.
    BadRequest {
        /// What was wrong with it.
        message: String,
    },
}

impl ApiError {
    /// A principle slug that did not resolve.
    pub fn principle_not_found(slug: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource: "principle",
            key: slug.into(),
        }
    }

    /// A workflow id that did not resolve.
    pub fn workflow_not_found(id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource: "workflow",
            key: id.into(),
        }
    }

    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON body sent with error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error kind ("not_found", "bad_request").
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::NotFound { resource, key } => ErrorBody {
                error: "not_found".to_string(),
                message: format!("no {resource} with key '{key}'"),
            },
            ApiError::BadRequest { message } => ErrorBody {
                error: "bad_request".to_string(),
                message: message.clone(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::principle_not_found("nope");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let err = ApiError::BadRequest {
            message: "unknown category: MARKETING".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_carries_json_body() {
        let response = ApiError::workflow_not_found("missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
