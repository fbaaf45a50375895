//! Error handling for the ledger
//!
//! Expected conditions (an empty pool, a missing checkpoint) are ordinary
//! values; everything here is a real failure that callers must look at.

use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, BlockchainError>;

/// Error types for ledger operations
#[derive(Debug, Clone, PartialEq)]
pub enum BlockchainError {
    /// File I/O errors
    Io(String),
    /// No checkpoint has been written yet
    CheckpointNotFound(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Mining gave up before finding an accepted nonce
    Mining(String),
    /// Block validation errors
    InvalidBlock(String),
    /// Malformed user input
    InvalidArgument(String),
}

impl fmt::Display for BlockchainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockchainError::Io(msg) => write!(f, "I/O error: {msg}"),
            BlockchainError::CheckpointNotFound(msg) => write!(f, "Checkpoint not found: {msg}"),
            BlockchainError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            BlockchainError::Mining(msg) => write!(f, "Mining error: {msg}"),
            BlockchainError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            BlockchainError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for BlockchainError {}

impl From<std::io::Error> for BlockchainError {
    fn from(err: std::io::Error) -> Self {
        BlockchainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BlockchainError {
    fn from(err: serde_json::Error) -> Self {
        BlockchainError::Serialization(err.to_string())
    }
}
