use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid {field}: {message}")]
    InvalidConfiguration { field: String, message: String },

    #[error("Position index must be >= 1, but got {position}")]
    InvalidPosition { position: u32 },

    #[error("Position {position} exceeds cable capacity of {bound}")]
    PositionOutOfBounds { position: u32, bound: u32 },

    #[error("Unknown cable: {id}")]
    UnknownCable { id: String },
}

pub type Result<T> = std::result::Result<T, SpliceError>;
