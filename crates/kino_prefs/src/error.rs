use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded ({limit} bytes)")]
    QuotaExceeded { limit: usize },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed store contents: {0}")]
    Serialize(#[from] serde_json::Error),
}
