//! Server error types with HTTP status code mapping
//!
//! Every failure leaving the HTTP surface is a structured JSON envelope
//! `{ "success": false, "error": message }`; no partial success payload
//! is ever bundled with an error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use core_catalog::CatalogError;
use core_sync::SyncError;
use serde::Serialize;
use thiserror::Error;

/// Server error type that wraps engine/catalog errors and provides HTTP
/// status mapping
#[derive(Error, Debug)]
pub enum ServerError {
    /// Missing or malformed request field
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Requested entity does not exist (distinct from an empty success)
    #[error("{0}")]
    NotFound(String),

    /// Route addressed an asset kind this server does not mirror
    #[error("Unknown asset kind: {0}")]
    UnknownKind(String),

    /// Catalog layer error
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Sync engine error
    #[error("{0}")]
    Sync(#[from] SyncError),
}

impl ServerError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::UnknownKind(_) => StatusCode::NOT_FOUND,

            ServerError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Catalog(CatalogError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,

            // Repository and migration failures, and anything the sync
            // engine surfaces, are server-side faults.
            ServerError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Sync(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ServerError::BadRequest(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        ServerError::NotFound(msg.into())
    }
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Error message
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::UnknownKind("gifs".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Catalog(CatalogError::NotFound {
                entity_type: "Category".to_string(),
                id: "Holiday".to_string(),
            })
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Catalog(CatalogError::Migration("boom".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
