use crate::domain::note::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IouError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("debt note not found: {0}")]
    NotFound(NoteId),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    Storage(#[from] rocksdb::Error),
    #[error("internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, IouError>;
