//! API error handling.
//!
//! This module provides the error response type for the API and the
//! mapping from conversion failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::convert::ConvertError;

// =============================================================================
// Error Body
// =============================================================================

/// JSON body carried by every error response: `{"error": <message>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

// =============================================================================
// API Error Response
// =============================================================================

/// API error response pairing a status code with the error body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error body serialized as JSON.
    pub body: ErrorBody,
}

impl ApiErrorResponse {
    /// Creates a new API error response.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            body: ErrorBody { error: message },
        }
    }

    /// Creates a 400 Bad Request response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ConvertError> for ApiErrorResponse {
    fn from(error: ConvertError) -> Self {
        // Every conversion failure is a deterministic client mistake;
        // the core performs no I/O, so nothing here is 5xx-worthy.
        match error {
            ConvertError::InvalidFormat { .. }
            | ConvertError::OutOfRange { .. }
            | ConvertError::InvalidRange { .. } => Self::bad_request(error.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
