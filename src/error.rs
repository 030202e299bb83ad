use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Unknown task status: {0}")]
    UnknownStatus(String),

    #[error("Position {index} is out of range for column {column} ({len} items)")]
    PositionOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[cfg(feature = "http-api")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}
