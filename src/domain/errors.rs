use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Malformed cart state: {0}")]
    MalformedState(serde_json::Error),
    #[error("Failed to encode cart: {0}")]
    Encode(serde_json::Error),
}
