//! Error types for pagecheck operations.

use thiserror::Error;

/// Errors that can occur while loading checks, acquiring a document, or
/// evaluating selectors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid checks file: {0}")]
    InvalidChecks(String),

    #[error("Invalid selector: {0}")]
    Selector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
