//! Server error types

use thiserror::Error;

/// Errors raised while bootstrapping or running the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result type for server bootstrap operations
pub type Result<T> = std::result::Result<T, ServerError>;
