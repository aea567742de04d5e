use thiserror::Error;

/// Failures of the surfaces around extraction. Field extraction itself never
/// fails; a field that cannot be recovered is simply `None`.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Invalid recognition config: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
