//! Error types for the synomorph library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`SynomorphError`] enum.
//!
//! # Examples
//!
//! ```
//! use synomorph::error::{Result, SynomorphError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynomorphError::dictionary("Invalid entry"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for synomorph operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum SynomorphError {
    /// I/O errors (file operations, stream reading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Tokenization and text analysis errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dictionary loading and validation errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Morphological analyzer errors
    #[error("Morphology error: {0}")]
    Morphology(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`SynomorphError`].
pub type Result<T> = std::result::Result<T, SynomorphError>;

impl SynomorphError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SynomorphError::Analysis(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SynomorphError::Dictionary(msg.into())
    }

    /// Create a new morphology error.
    pub fn morphology<S: Into<String>>(msg: S) -> Self {
        SynomorphError::Morphology(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SynomorphError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SynomorphError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SynomorphError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = SynomorphError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = SynomorphError::morphology("Test morphology error");
        assert_eq!(error.to_string(), "Morphology error: Test morphology error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SynomorphError::from(io_error);

        match error {
            SynomorphError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
