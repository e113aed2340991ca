//! Core error types.

use thiserror::Error;

/// Core errors.
#[derive(Debug, Error)]
pub enum Error {
    /// SQLite layer error.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A money value could not be parsed or does not fit.
    #[error("invalid money value: {0}")]
    InvalidMoney(String),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
