use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store capability not available: {0}")]
    NotAvailable(String),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),

    #[error("Store API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
