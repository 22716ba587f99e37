//! Error types for device-tree generation

use thiserror::Error;

/// Main error type for vp-dtgen operations
#[derive(Error, Debug)]
pub enum DtGenError {
    /// Unknown or unsupported VP target variant
    #[error("Invalid target: \"{0}\" (expected one of: {})", crate::Target::NAMES.join(", "))]
    InvalidTarget(String),

    /// Malformed integer literal in a numeric option
    #[error("Invalid number: \"{0}\"")]
    InvalidNumber(String),

    /// Failure writing the generated tree
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for vp-dtgen operations
pub type Result<T> = std::result::Result<T, DtGenError>;
