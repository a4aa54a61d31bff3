use thiserror::Error;

/// Failures while loading the deal list.
#[derive(Debug, Error)]
pub enum DealsError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Decode error: {0}")]
    Decode(String),
}
