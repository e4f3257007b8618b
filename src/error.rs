use thiserror::Error;

pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
