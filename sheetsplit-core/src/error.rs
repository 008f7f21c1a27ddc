//! Typed errors for the partitioning core

use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Chunk size below the allowed minimum of one row
    #[error("chunk size must be at least 1 row")]
    InvalidChunkSize,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chunk_size_display() {
        let error = CoreError::InvalidChunkSize;
        assert_eq!(error.to_string(), "chunk size must be at least 1 row");
    }
}
