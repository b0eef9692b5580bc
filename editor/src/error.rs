//! Error taxonomy shared by the resolvers and the dataset store.

use thiserror::Error;

/// Failure modes for file-serving resolution.
///
/// `NotFound` covers both missing and disallowed paths: callers must not be
/// able to distinguish "does not exist" from "exists but is not servable".
#[derive(Debug, Error)]
pub enum ServeError {
    /// Missing file or disallowed path.
    #[error("file not found")]
    NotFound,
    /// Traversal pattern in a requested image filename.
    #[error("invalid filename")]
    InvalidFilename,
    /// The image root is misconfigured.
    #[error("server configuration error: {0}")]
    Configuration(String),
    /// Unexpected I/O fault while serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failure modes for dataset persistence.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The payload is not a JSON object.
    #[error("Data must be a JSON object")]
    InvalidPayload,
    /// Underlying serialization or filesystem failure.
    #[error("{0:#}")]
    Storage(anyhow::Error),
}
