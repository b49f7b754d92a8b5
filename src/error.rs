use thiserror::Error;

/// Failure of the durable greeting database. Fatal to the operation that hit it.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type GreeterResult<T> = Result<T, GreeterError>;
