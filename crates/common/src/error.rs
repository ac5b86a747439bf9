//! Error types for Shopwright

use thiserror::Error;

/// Result type alias using Shopwright Error
pub type Result<T> = std::result::Result<T, Error>;

/// Shopwright error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
