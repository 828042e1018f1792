use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unknown feature flag: {0}")]
    UnknownFeatureFlag(String),
}
