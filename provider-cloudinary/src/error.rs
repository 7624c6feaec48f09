//! Error types for the Cloudinary provider

use store_traits::error::StoreError;
use thiserror::Error;

/// Cloudinary provider errors
#[derive(Error, Debug)]
pub enum CloudinaryError {
    /// Account credentials are missing or blank
    #[error("Cloudinary credentials missing: set cloud name, API key and API secret")]
    MissingCredentials,

    /// API request returned an error
    #[error("Cloudinary API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for Cloudinary operations
pub type Result<T> = std::result::Result<T, CloudinaryError>;

impl From<CloudinaryError> for StoreError {
    fn from(error: CloudinaryError) -> Self {
        match error {
            CloudinaryError::MissingCredentials => {
                StoreError::NotAvailable("Cloudinary credentials missing".to_string())
            }
            CloudinaryError::ApiError {
                status_code,
                message,
            } => StoreError::Api {
                status: status_code,
                message,
            },
            CloudinaryError::ParseError(msg) => {
                StoreError::OperationFailed(format!("Parse error: {}", msg))
            }
            CloudinaryError::Store(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CloudinaryError::ApiError {
            status_code: 401,
            message: "Invalid credentials".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Cloudinary API error (status 401): Invalid credentials"
        );
    }

    #[test]
    fn test_error_conversion() {
        let error = CloudinaryError::MissingCredentials;
        let store_error: StoreError = error.into();

        assert!(matches!(store_error, StoreError::NotAvailable(_)));
    }

    #[test]
    fn test_api_error_preserves_status() {
        let error = CloudinaryError::ApiError {
            status_code: 420,
            message: "rate limited".to_string(),
        };
        let store_error: StoreError = error.into();

        match store_error {
            StoreError::Api { status, .. } => assert_eq!(status, 420),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
