use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Storage rejected the batch: {message}")]
    StorageError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    ConfigError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
