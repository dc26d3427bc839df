//! Unified error types for the VPL ecosystem
//!
//! This module provides a common error type [`VplError`] that can represent
//! errors from any part of the system. Domain-specific error types can be
//! converted to `VplError` for uniform error handling at API boundaries.

use thiserror::Error;

/// Unified error type for all VPL operations.
///
/// This enum provides a common error representation for the VPL ecosystem,
/// allowing errors from configuration, modeling, solving, and reporting to
/// be handled uniformly.
#[derive(Error, Debug)]
pub enum VplError {
    /// I/O errors (file access, report writing, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Solver/algorithm errors
    #[error("Solver error: {0}")]
    Solver(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using VplError.
pub type VplResult<T> = Result<T, VplError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for VplError {
    fn from(err: anyhow::Error) -> Self {
        VplError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for VplError {
    fn from(s: String) -> Self {
        VplError::Other(s)
    }
}

impl From<&str> for VplError {
    fn from(s: &str) -> Self {
        VplError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VplError::Solver("model rejected".into());
        assert!(err.to_string().contains("Solver error"));
        assert!(err.to_string().contains("model rejected"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let vpl_err: VplError = io_err.into();
        assert!(matches!(vpl_err, VplError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> VplResult<()> {
            Err(VplError::Config("test".into()))
        }

        fn outer() -> VplResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
