//! Demo error types.

use thiserror::Error;

/// Demo errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Store or model error.
    #[error(transparent)]
    Core(#[from] pricewatch_core::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias for demo operations.
pub type Result<T> = std::result::Result<T, Error>;
