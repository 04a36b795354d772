use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorksightError {
    #[error("Storage read failed: {0}")]
    Storage(String),

    #[error("OCR processing failed: {0}")]
    Ocr(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorksightError>;
