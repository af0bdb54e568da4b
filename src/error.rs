//! Error types for the vitae library.

use std::io;
use thiserror::Error;

/// Result type alias for vitae operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or extracting documents.
///
/// The structural parser itself is total and never produces an error;
/// failures are confined to I/O and to decoding positioned-run dumps.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The positioned-run dump could not be decoded. A corrupt source
    /// fails the whole extraction; no partial output is produced.
    #[error("Document extraction error: {0}")]
    Extraction(String),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while rendering structured output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
