use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonHashError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unrepresentable number: {0}")]
    UnrepresentableNumber(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, JsonHashError>;
