use crate::config::ConfigError;
use crate::serde_document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to get Google Cloud credentials: {0}")]
    Auth(#[from] gcp_auth::Error),
    #[error("failed to connect: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("invalid endpoint: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),
    #[error("request failed: {0}")]
    Status(#[from] tonic::Status),
    #[error("invalid request metadata: {0}")]
    Metadata(#[from] tonic::metadata::errors::InvalidMetadataValue),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read document fields: {0}")]
    Deserialize(serde_document::Error),
    #[error("failed to build document fields: {0}")]
    Serialize(serde_document::Error),
    #[error("document not found: {0}")]
    NotFound(String),
}
